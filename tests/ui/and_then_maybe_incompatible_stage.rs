use maybe::{Maybe, and_then_maybe, just};

fn describe(x: i32) -> Maybe<String> {
    just(x.to_string())
}

fn main() {
    let _ = and_then_maybe(describe, |x: i32| just(x));
}
