use std::ffi::c_char;

/// Get the version of the cpux library
///
/// Returns a static string that should not be freed.
#[no_mangle]
pub extern "C" fn cpux_version() -> *const c_char {
    static VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");
    VERSION.as_ptr().cast()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn test_version() {
        let version = cpux_version();
        assert!(!version.is_null());
        let version_str = unsafe { CStr::from_ptr(version).to_str().unwrap() };
        assert_eq!(version_str, env!("CARGO_PKG_VERSION"));
    }
}
