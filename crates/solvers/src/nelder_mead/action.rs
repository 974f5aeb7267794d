/// Actions an observer can take during Nelder-Mead iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the best vertex of the current simplex.
    StopEarly,
}
