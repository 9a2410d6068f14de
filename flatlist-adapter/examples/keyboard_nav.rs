// Example: drive a select menu with arrow keys through the controller.
use flatlist::{FlatListOptions, OptionValue};
use flatlist_adapter::Controller;

#[derive(Clone, Debug)]
struct Item {
    id: u32,
}

impl OptionValue for Item {
    type Value = u32;

    fn value(&self) -> u32 {
        self.id
    }
}

fn main() {
    let items: Vec<Item> = (0..1_000).map(|id| Item { id }).collect();
    let mut c = Controller::new(
        FlatListOptions::<Item, u32>::new(8, 1).with_default_value(Some(Item { id: 500 })),
    );

    let frame = c.sync(&items);
    println!("frame={frame:?} offset={}", c.window().scroll_offset());

    for step in 0..12 {
        c.focus_next(items.len());
        let mut painted = Vec::new();
        let cmd = c.render_pass(&items, |slot, item| {
            if slot.is_visible {
                painted.push(item.id);
            }
        });
        println!(
            "step={step} focused={:?} cmd={cmd:?} offset={} painted={painted:?}",
            c.focused(),
            c.window().scroll_offset()
        );
    }

    // Home key: jump far outside the window.
    c.focus_first(items.len());
    let cmd = c.render_pass(&items, |_, _| {});
    println!("home: cmd={cmd:?} offset={}", c.window().scroll_offset());
}
