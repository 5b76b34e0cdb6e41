//! Per-entity resource service constructors.
//!
//! Each entity gets the same uniform service, bound to its endpoint path.
//! Entity-specific behavior (search fields, delete gates, undo windows)
//! lives in the page layer, not here.

use models::{
    category::{CategoryDto, CategoryUi},
    client::{ClientDto, ClientUi},
    group::{GroupDto, GroupUi},
    job::{JobDto, JobUi},
    patient::{PatientDto, PatientUi},
    payment_method::{PaymentMethodDto, PaymentMethodUi},
    product::{ProductDto, ProductUi},
    user::{UserDto, UserUi},
};

use crate::{http::HttpClient, resource::ResourceService};

pub type ProductsService = ResourceService<ProductDto, ProductUi>;
pub type CategoriesService = ResourceService<CategoryDto, CategoryUi>;
pub type ClientsService = ResourceService<ClientDto, ClientUi>;
pub type PatientsService = ResourceService<PatientDto, PatientUi>;
pub type JobsService = ResourceService<JobDto, JobUi>;
pub type UsersService = ResourceService<UserDto, UserUi>;
pub type GroupsService = ResourceService<GroupDto, GroupUi>;
pub type PaymentMethodsService = ResourceService<PaymentMethodDto, PaymentMethodUi>;

pub fn products(http: &HttpClient) -> ProductsService {
    ResourceService::new(http.clone(), "/productos", "producto")
}

pub fn categories(http: &HttpClient) -> CategoriesService {
    ResourceService::new(http.clone(), "/categorias", "categoria")
}

pub fn clients(http: &HttpClient) -> ClientsService {
    ResourceService::new(http.clone(), "/clientes", "cliente")
}

pub fn patients(http: &HttpClient) -> PatientsService {
    ResourceService::new(http.clone(), "/pacientes", "paciente")
}

pub fn jobs(http: &HttpClient) -> JobsService {
    ResourceService::new(http.clone(), "/trabajos", "trabajo")
}

pub fn users(http: &HttpClient) -> UsersService {
    ResourceService::new(http.clone(), "/usuarios", "usuario")
}

pub fn groups(http: &HttpClient) -> GroupsService {
    ResourceService::new(http.clone(), "/grupos", "grupo")
}

pub fn payment_methods(http: &HttpClient) -> PaymentMethodsService {
    ResourceService::new(http.clone(), "/formas-pago", "forma de pago")
}
