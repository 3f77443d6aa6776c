use crate::domain::model::ParsedPath;

pub trait PathStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// `None` means the path does not have the shape this strategy accepts.
    fn parse(&self, path: &str) -> Option<ParsedPath>;
}
