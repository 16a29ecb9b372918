//! Logical administration actions and their URLs.

use std::fmt;

/// One logical administration sub-request.
///
/// The set is closed: the enum is the only way an action can reach the
/// URL builder, so an unknown action is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Bring the WAN connection up
    Connect,
    /// Drop the WAN connection
    Disconnect,
    /// Reboot the whole device
    Reboot,
}

impl Action {
    /// Menu page name in the firmware's URL scheme.
    const fn menu(self) -> &'static str {
        match self {
            Self::Connect | Self::Disconnect => "Status",
            Self::Reboot => "SysReboot",
        }
    }

    /// Literal query string the firmware parses.
    const fn query(self) -> &'static str {
        match self {
            Self::Connect => "Connect=any_string&wan=1",
            Self::Disconnect => "Disconnect=any_string&wan=1",
            Self::Reboot => "Reboot=any_string",
        }
    }

    /// Builds the administration URL for this action.
    ///
    /// The firmware parses the query string literally, so it must stay
    /// byte-identical to what the stock web UI sends.
    #[must_use]
    pub fn url(self, host: &str, port: u16) -> String {
        format!(
            "http://{host}:{port}/userRpm/{menu}Rpm.htm?{query}",
            menu = self.menu(),
            query = self.query(),
        )
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Connect => "Connect",
            Self::Disconnect => "Disconnect",
            Self::Reboot => "Reboot",
        };
        f.write_str(name)
    }
}
