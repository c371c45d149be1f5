use std::fmt::Display;

pub trait PrettyJoiner {
    fn sep() -> &'static str {
        ", "
    }

    /// Joins every item with [`Self::sep`], or yields `placeholder` when
    /// there is nothing to join.
    fn pretty_join_or(&self, placeholder: &str) -> String;
}

impl<T: Display> PrettyJoiner for [T] {
    fn pretty_join_or(&self, placeholder: &str) -> String {
        if self.is_empty() {
            return placeholder.to_owned();
        }
        self.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(Self::sep())
    }
}
