/*! Sentence alignment boundary and group merging

The alignment itself is computed by an external collaborator behind the
[Aligner] trait: given the two pre-segmented texts it returns ordered pairs
of index groups, each pair meaning "these source sentences correspond to
these target sentences".

Raw indices cross the boundary as JSON numbers and may be floats
(numpy scalars serialize that way); [normalize] converts them to plain
`usize` at the boundary so nothing downstream sees the raw representation.
[merge] then rebuilds one output sentence per group.

!*/
mod aligner;
mod merge;
mod normalize;

pub use aligner::Aligner;
pub use aligner::ProcessAligner;
pub use merge::merge;
pub use normalize::normalize;
pub use normalize::Alignment;
pub use normalize::AlignmentPair;
pub use normalize::RawAlignment;
