pub mod a001_place;
