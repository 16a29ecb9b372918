//! Tests for action URL construction.
//!
//! The query strings are a binary compatibility surface: the firmware
//! parses them literally, so the assertions compare full URLs.

use super::Action;

mod url_construction {
    use super::*;

    #[test]
    fn connect_url_is_byte_identical() {
        assert_eq!(
            Action::Connect.url("10.0.0.1", 8080),
            "http://10.0.0.1:8080/userRpm/StatusRpm.htm?Connect=any_string&wan=1"
        );
    }

    #[test]
    fn disconnect_url_is_byte_identical() {
        assert_eq!(
            Action::Disconnect.url("192.168.0.1", 80),
            "http://192.168.0.1:80/userRpm/StatusRpm.htm?Disconnect=any_string&wan=1"
        );
    }

    #[test]
    fn reboot_url_is_byte_identical() {
        assert_eq!(
            Action::Reboot.url("192.168.0.1", 80),
            "http://192.168.0.1:80/userRpm/SysRebootRpm.htm?Reboot=any_string"
        );
    }

    #[test]
    fn host_names_work_as_well_as_addresses() {
        assert_eq!(
            Action::Reboot.url("router.lan", 8080),
            "http://router.lan:8080/userRpm/SysRebootRpm.htm?Reboot=any_string"
        );
    }
}

mod display {
    use super::*;

    #[test]
    fn actions_display_by_name() {
        assert_eq!(Action::Connect.to_string(), "Connect");
        assert_eq!(Action::Disconnect.to_string(), "Disconnect");
        assert_eq!(Action::Reboot.to_string(), "Reboot");
    }
}
