use tcogen::ComponentOpts;

#[derive(ComponentOpts)]
pub struct Card {
    #[opts(default = "Hello")]
    pub title: String,
    #[opts(default = "3")]
    pub count: i64,
    pub visible: bool,
}

fn main() {
    assert_eq!(<Card as ComponentOpts>::FIELDS, &["title", "count", "visible"]);
    assert_eq!(<Card as ComponentOpts>::DEFAULTS.len(), 2);
}
