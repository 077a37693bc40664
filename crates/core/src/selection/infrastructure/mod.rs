pub mod pass_through_selector;
