#![deny(warnings)]
pub mod logic;
pub mod model;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "mdclue"
    }

    pub const fn codename() -> &'static str {
        "Case File"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use super::AppInfo;

    #[test]
    fn exposes_static_metadata() {
        assert_eq!(AppInfo::name(), "mdclue");
        assert_eq!(AppInfo::codename(), "Case File");
        assert!(!AppInfo::version().is_empty());
    }
}
