mod convolution;
pub mod cpu_rectangular_blurrer;
