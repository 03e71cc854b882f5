/*!
The simplification techniques.

Each technique:
- Builds its own [occurrence index](crate::db::occurrence) from the stored clauses, plain or signed per the entry parameter.
- Scans candidates in a fixed order --- atoms ascending, or candidates ascending by size --- so a run on fixed input is deterministic.
- Uses the shared [marks](crate::db::marks) transiently inside each check, balanced on every exit path.
- Records counts only: no clause is removed on a positive verdict.

On the signed variants, every pre-check is one-directional: a signature may certify the verdict the literal-level check would reach, never a different one.
The certificates all rest on the same observation: if the buckets of two atom sets are disjoint (allowing for collisions via the `unique` bits), the sets themselves are disjoint.
*/

pub mod block;
pub mod elim;
pub mod subsume;
