use crate::direction::Direction;


/// Anything the user can ask the back end to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Do not do anything. Having this around saves the front end from
    /// producing an Option<Command> for keys that mean nothing.
    Nothing,

    /// Move one step in the given direction if possible.
    Move(Direction),

    /// Go back to the state before the last successful move.
    Undo,

    /// Start the current level over from the beginning.
    Restart,
}
