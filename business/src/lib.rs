pub mod application {
    mod identity;
    #[cfg(test)]
    mod test_support;
    pub mod catalog {
        pub mod get_all;
        pub mod get_by_id;
    }
    pub mod cart {
        pub(crate) mod common;
        pub mod add_line;
        pub mod get_snapshot;
        pub mod remove_line;
        pub mod update_quantity;
    }
    pub mod checkout {
        pub mod place_order;
    }
    pub mod media {
        pub mod delete;
        pub mod upload;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod identity {
        pub mod errors;
        pub mod provider;
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod snapshot;
        pub mod use_cases {
            pub mod add_line;
            pub mod get_snapshot;
            pub mod remove_line;
            pub mod update_quantity;
        }
    }
    pub mod checkout {
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod place_order;
        }
    }
    pub mod media {
        pub mod errors;
        pub mod model;
        pub mod storage;
        pub mod use_cases {
            pub mod delete;
            pub mod upload;
        }
    }
}
