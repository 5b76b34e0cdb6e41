//! Route table and navigation guards.
//!
//! Guards are pure predicates over the session with a redirect outcome;
//! there is no retry or async wait. Navigation can carry a one-shot flash
//! message for the destination page.

use models::Role;
use services::session_store::SessionStore;
use tracing::debug;

/// Access requirement of a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Guard {
    Public,
    /// Token presence; redirects to `/login` when absent.
    Authenticated,
    /// Authenticated and role equality; `/unauthorized` on mismatch.
    RoleIs(Role),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageId {
    Login,
    Unauthorized,
    Dashboard,
    Products,
    ProductForm,
    Categories,
    CategoryForm,
    Clients,
    ClientForm,
    Patients,
    PatientForm,
    Jobs,
    JobForm,
    Users,
    UserForm,
    Groups,
    GroupForm,
    PaymentMethods,
    PaymentMethodForm,
    Reports,
}

#[derive(Debug, Clone)]
pub struct Route {
    pub path: &'static str,
    pub page: PageId,
    pub guard: Guard,
}

/// Result of a navigation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    Allowed {
        page: PageId,
        params: Vec<(String, String)>,
    },
    RedirectLogin,
    RedirectUnauthorized,
    NotFound,
}

pub struct Router {
    routes: Vec<Route>,
    session: SessionStore,
    flash: Option<String>,
}

impl Router {
    pub fn new(routes: Vec<Route>, session: SessionStore) -> Self {
        Self {
            routes,
            session,
            flash: None,
        }
    }

    pub fn with_default_routes(session: SessionStore) -> Self {
        use Guard::*;
        use PageId::*;
        let routes = vec![
            Route { path: "/login", page: Login, guard: Public },
            Route { path: "/unauthorized", page: Unauthorized, guard: Public },
            Route { path: "/", page: Dashboard, guard: Authenticated },
            Route { path: "/productos", page: Products, guard: Authenticated },
            Route { path: "/productos/nuevo", page: ProductForm, guard: Authenticated },
            Route { path: "/productos/:id", page: ProductForm, guard: Authenticated },
            Route { path: "/categorias", page: Categories, guard: Authenticated },
            Route { path: "/categorias/nuevo", page: CategoryForm, guard: Authenticated },
            Route { path: "/categorias/:id", page: CategoryForm, guard: Authenticated },
            Route { path: "/clientes", page: Clients, guard: Authenticated },
            Route { path: "/clientes/nuevo", page: ClientForm, guard: Authenticated },
            Route { path: "/clientes/:id", page: ClientForm, guard: Authenticated },
            Route { path: "/pacientes", page: Patients, guard: Authenticated },
            Route { path: "/pacientes/nuevo", page: PatientForm, guard: Authenticated },
            Route { path: "/pacientes/:id", page: PatientForm, guard: Authenticated },
            Route { path: "/trabajos", page: Jobs, guard: Authenticated },
            Route { path: "/trabajos/nuevo", page: JobForm, guard: Authenticated },
            Route { path: "/trabajos/:id", page: JobForm, guard: Authenticated },
            Route { path: "/formas-pago", page: PaymentMethods, guard: Authenticated },
            Route { path: "/formas-pago/nuevo", page: PaymentMethodForm, guard: Authenticated },
            Route { path: "/formas-pago/:id", page: PaymentMethodForm, guard: Authenticated },
            Route { path: "/usuarios", page: Users, guard: RoleIs(Role::Admin) },
            Route { path: "/usuarios/nuevo", page: UserForm, guard: RoleIs(Role::Admin) },
            Route { path: "/usuarios/:id", page: UserForm, guard: RoleIs(Role::Admin) },
            Route { path: "/grupos", page: Groups, guard: RoleIs(Role::Admin) },
            Route { path: "/grupos/nuevo", page: GroupForm, guard: RoleIs(Role::Admin) },
            Route { path: "/grupos/:id", page: GroupForm, guard: RoleIs(Role::Admin) },
            Route { path: "/reportes", page: Reports, guard: Authenticated },
        ];
        Self::new(routes, session)
    }

    /// Resolve a path against the table and evaluate its guard. A flash
    /// message, when given, is stored for the destination to consume once.
    pub fn navigate(&mut self, path: &str, flash: Option<String>) -> Navigation {
        let Some((route, params)) = self.match_route(path) else {
            debug!(path, "no route matched");
            return Navigation::NotFound;
        };
        let verdict = match route.guard {
            Guard::Public => Navigation::Allowed {
                page: route.page,
                params,
            },
            Guard::Authenticated => {
                if self.session.is_authenticated() {
                    Navigation::Allowed {
                        page: route.page,
                        params,
                    }
                } else {
                    Navigation::RedirectLogin
                }
            }
            Guard::RoleIs(required) => {
                if !self.session.is_authenticated() {
                    Navigation::RedirectLogin
                } else if self.session.role() == Some(required) {
                    Navigation::Allowed {
                        page: route.page,
                        params,
                    }
                } else {
                    Navigation::RedirectUnauthorized
                }
            }
        };
        if matches!(verdict, Navigation::Allowed { .. }) {
            self.flash = flash;
        }
        verdict
    }

    /// One-shot flash message left by the previous navigation.
    pub fn take_flash(&mut self) -> Option<String> {
        self.flash.take()
    }

    fn match_route(&self, path: &str) -> Option<(&Route, Vec<(String, String)>)> {
        let segments: Vec<&str> = path.trim_end_matches('/').split('/').collect();
        'routes: for route in &self.routes {
            let pattern: Vec<&str> = route.path.trim_end_matches('/').split('/').collect();
            if pattern.len() != segments.len() {
                continue;
            }
            let mut params = Vec::new();
            for (pat, seg) in pattern.iter().zip(&segments) {
                if let Some(name) = pat.strip_prefix(':') {
                    params.push((name.to_string(), (*seg).to_string()));
                } else if pat != seg {
                    continue 'routes;
                }
            }
            return Some((route, params));
        }
        None
    }
}
