/// The imperative side of a windowed list host.
///
/// Hosts paint only the rows inside their current window; the core asks them to move that window
/// through this trait, at most once per render pass.
pub trait ListHost {
    fn scroll_to_row(&mut self, index: usize);
}

impl<H: ListHost + ?Sized> ListHost for &mut H {
    fn scroll_to_row(&mut self, index: usize) {
        (**self).scroll_to_row(index);
    }
}
