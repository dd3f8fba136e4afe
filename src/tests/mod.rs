mod psd;


use std::path::PathBuf;

pub fn ssc_catalog() -> PathBuf {
    PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("test_resources")
        .join("SSC")
        .join("ITRF2014_SSC.txt")
}

pub fn psd_catalog() -> PathBuf {
    PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("test_resources")
        .join("PSD")
        .join("ITRF2014-psd-gnss.dat")
}
