/// Parse tree module
/// Contains the tagged parse-tree node type and its pretty printer
///
/// Submodules:
/// - tree: the `ParseTree` enum, one variant per grammar production
pub mod tree;
