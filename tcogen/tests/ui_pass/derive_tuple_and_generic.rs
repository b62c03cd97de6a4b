use tcogen::ComponentOpts;

#[derive(ComponentOpts)]
pub struct Pair(pub i64, pub String);

#[derive(ComponentOpts)]
pub struct Wrapper<T: Clone> {
    pub inner: T,
}

fn main() {
    assert!(<Pair as ComponentOpts>::FIELDS.is_empty());
    assert_eq!(<Wrapper<u8> as ComponentOpts>::FIELDS, &["inner"]);
}
