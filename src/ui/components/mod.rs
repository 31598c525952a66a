pub mod log_area;
