pub mod ssd_region_detector;
