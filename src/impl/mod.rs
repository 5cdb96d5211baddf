// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod recibos_api_datasource;
        pub(crate) mod recibos_datasource;
        pub(crate) mod recibos_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod recibo_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod recibos_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod notification;
        pub(crate) mod printable_card;
        pub(crate) mod recibo;
        pub(crate) mod recibo_form;
    }
    pub(crate) mod logic {
        pub(crate) mod recibo_factory;
        pub(crate) mod recibo_filter;
    }
    pub(crate) mod repositories {
        pub(crate) mod recibos_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod recibos_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod card_printer;
    pub(crate) mod endpoint;
    pub(crate) mod recibo_fmt;
    pub(crate) mod utils;
    pub(crate) mod view_model;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::notification::*;
        pub use crate::domain::entities::printable_card::*;
        pub use crate::domain::entities::recibo::*;
        pub use crate::domain::entities::recibo_form::*;
    }

    pub mod repositories {
        pub use crate::data::datasources::recibos_api_datasource::RecibosApiDatasourceImpl;
        pub use crate::data::datasources::recibos_datasource::RecibosDatasource;
        pub use crate::data::datasources::recibos_json_datasource::RecibosJsonDatasourceImpl;
        pub use crate::data::repositories::recibos_repository_impl::*;
        pub use crate::domain::repositories::recibos_repository::*;
    }

    pub mod view_model {
        pub use crate::presentation::recibo_fmt::TableRow;
        pub use crate::presentation::view_model::*;
    }

    pub mod endpoint {
        pub use crate::presentation::endpoint::*;
    }
}
