use maybe::{Maybe, and_then_maybe, just};

fn main() {
    let _ = and_then_maybe(just::<i32>, |a: i32, b: i32| -> Maybe<i32> { just(a + b) });
}
