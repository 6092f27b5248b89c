pub mod application {
    pub mod image {
        pub mod upload;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod user {
        pub mod get_all;
        pub mod remove;
        pub mod set_role;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod session;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod image {
        pub mod errors;
        pub mod key;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod upload;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod remove;
            pub mod set_role;
        }
    }
}
