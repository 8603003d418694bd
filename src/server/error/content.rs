use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    /// Every id in an association request referenced a missing row.
    ///
    /// `kind` names the associated table (genre, category or sponsor).
    #[error("No valid {kind} IDs provided")]
    NoValidAssociations { kind: &'static str },
}
