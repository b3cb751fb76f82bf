/// Reachability of a website, derived purely from the HTTP status it answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebsiteStatus {
    Up,
    Down,
}

impl WebsiteStatus {
    /// Only an exact `200` counts as up; redirects, client and server errors
    /// are all down.
    pub fn from_status(code: u16) -> Self {
        if code == 200 {
            WebsiteStatus::Up
        } else {
            WebsiteStatus::Down
        }
    }

    pub fn is_up(self) -> bool {
        matches!(self, WebsiteStatus::Up)
    }
}
