pub mod config;
pub mod domain {
    pub mod application;
    pub mod invoice;
    pub mod payment;
}
pub mod gateways;
pub mod http {
    pub mod respond;
    pub mod handlers {
        pub mod applications;
        pub mod ops;
        pub mod payments;
        pub mod profiles;
        pub mod services;
        pub mod tax;
    }
    pub mod middleware {
        pub mod api_key;
    }
}
pub mod service {
    pub mod application_service;
    pub mod payment_service;
    pub mod profile_service;
    pub mod tax_service;
    pub mod validation;
}

#[derive(Clone)]
pub struct AppState {
    pub payment_service: service::payment_service::PaymentService,
    pub tax_service: service::tax_service::TaxService,
    pub application_service: service::application_service::ApplicationService,
    pub profile_service: service::profile_service::ProfileService,
    pub api_key: String,
}
