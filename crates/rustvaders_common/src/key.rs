/// Logical keys a frontend can report, independent of any windowing library.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    Num1,
    Num2,
    A,
    C,
    D,
    J,
    K,
    L,
    P,
    S,
    T,
    Space,
    Left,
    Right,
    Escape,
    /// A key the frontend could not map.
    None,
}
