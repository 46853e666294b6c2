pub mod previews;
