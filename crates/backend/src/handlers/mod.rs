pub mod d100_associations;
