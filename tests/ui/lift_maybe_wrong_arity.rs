use maybe::lift_maybe;

fn main() {
    let _ = lift_maybe(|a: i32, b: i32| a + b);
}
