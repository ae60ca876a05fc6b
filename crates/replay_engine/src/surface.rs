use replay_core::Frame;

/// The page's outer surface: everything the core asks the outside world to show or do.
pub trait PageSurface {
    fn render(&mut self, frame: &Frame);
    fn show_share_link(&mut self, url: &str);
    fn focus_query(&mut self);
    fn navigate(&mut self, url: &str);
}
