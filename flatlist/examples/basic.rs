// Example: size a list, find the row to open on, and run the collect/flush protocol by hand.
use flatlist::{FlatList, FlatListOptions, ListHost, OptionValue};

#[derive(Clone, Debug)]
struct Country {
    code: &'static str,
    name: &'static str,
}

impl OptionValue for Country {
    type Value = &'static str;

    fn value(&self) -> &'static str {
        self.code
    }
}

struct PrintHost;

impl ListHost for PrintHost {
    fn scroll_to_row(&mut self, index: usize) {
        println!("host: scroll_to_row({index})");
    }
}

fn main() {
    let countries: Vec<Country> = (0..250)
        .map(|i| Country {
            code: if i == 120 { "NZ" } else { "XX" },
            name: "Somewhere",
        })
        .collect();

    let selected = Country {
        code: "NZ",
        name: "New Zealand",
    };
    let options = FlatListOptions::<Country, &'static str>::new(300, 35)
        .with_selected_value(Some(selected));
    let mut list = FlatList::new(options);

    let frame = list.frame(&countries);
    println!("frame={frame:?}");
    println!("first row name={}", countries[0].name);

    // A render pass: the host reports focus for the rows it painted, then flushes once.
    let mut host = PrintHost;
    list.on_item_focused(Some(120), true);
    list.on_item_focused(Some(128), false);
    list.on_item_focused(Some(129), false);
    let cmd = list.flush_into(countries.len(), &mut host);
    println!("issued={cmd:?}, state={:?}", list.focus_state());
}
