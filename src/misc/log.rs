/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [occurrence lists](crate::db::occurrence)
    pub const OCCURRENCE: &str = "occurrence";

    /// Logs related to [blocked clause elimination](crate::procedures::block)
    pub const BLOCK: &str = "block";

    /// Logs related to [bounded variable elimination](crate::procedures::elim)
    pub const ELIM: &str = "elim";

    /// Logs related to [forward subsumption](crate::procedures::subsume)
    pub const SUBSUME: &str = "subsume";

    /// Logs related to parsing
    pub const PARSE: &str = "parse";
}
