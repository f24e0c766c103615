use std::fmt;

/// One status page of the controller's embedded web server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Endpoint {
    Identity,
    State,
    Download,
    Setup,
    Installation,
    Settings,
    Errors,
}

impl Endpoint {
    /// Every endpoint, in the order a poll cycle requests them
    pub const ALL: [Endpoint; 7] = [
        Endpoint::Identity,
        Endpoint::State,
        Endpoint::Download,
        Endpoint::Setup,
        Endpoint::Installation,
        Endpoint::Settings,
        Endpoint::Errors,
    ];

    /// URL path of the page, relative to the device root
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Identity => "identity",
            Endpoint::State => "state",
            Endpoint::Download => "download",
            Endpoint::Setup => "setup",
            Endpoint::Installation => "installation",
            Endpoint::Settings => "settings",
            Endpoint::Errors => "errors",
        }
    }

    /// Returns true for the page parsed with the alarm page parser
    pub fn is_alarm_page(&self) -> bool {
        matches!(self, Endpoint::Errors)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
