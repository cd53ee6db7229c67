pub mod application {
    pub mod catalog {
        pub mod browse;
        pub mod get_contact_link;
        pub mod get_product_detail;
        pub mod list_banners;
        pub mod list_categories;
        pub mod load;
        pub mod resolve_banner;
        pub mod sessions;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_key;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod banner {
        pub mod model;
        pub mod resolution;
    }
    pub mod catalog {
        pub mod category;
        pub mod errors;
        pub mod fallback;
        pub mod model;
        pub mod session;
        pub mod source;
        pub mod view;
        pub mod use_cases {
            pub mod browse;
            pub mod get_contact_link;
            pub mod get_product_detail;
            pub mod list_banners;
            pub mod list_categories;
            pub mod load;
            pub mod resolve_banner;
            pub mod sessions;
        }
    }
    pub mod contact {
        pub mod errors;
        pub mod link;
    }
    pub mod product {
        pub mod detail;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_key;
            pub mod update;
        }
    }
}
