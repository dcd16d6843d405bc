pub mod wishlist_service;
