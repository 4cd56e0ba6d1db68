pub mod jd_service;
pub mod scan_service;
