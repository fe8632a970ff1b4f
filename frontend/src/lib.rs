//! Application frontend PayeTonKawa
//!
//! Architecture à contextes, faiblement couplée :
//! - `web::route` : table des routes (modèle de domaine)
//! - `web::router` : service de navigation gardée (moteur)
//! - `session` : magasin de session, source de vérité sur l'acteur courant
//! - `api` / `services` : transport HTTP et correspondances métier
//! - `components` : pages et éléments d'interface

pub mod api;
pub mod config;
pub mod session;

pub mod services {
    pub mod clients;
    pub mod commandes;
    pub mod produits;
}

mod components {
    pub mod boutique;
    pub mod clients;
    pub mod commandes;
    pub mod dashboard;
    mod icons;
    pub mod layout;
    mod login_modal;
    pub mod mes_commandes;
    pub mod produits;
    pub mod profil;
    mod statut_badge;
}

// Enveloppes des API natives du navigateur.
pub(crate) mod web {
    pub mod route;
    pub mod router;
    pub mod storage;

    pub use storage::LocalStorage;
}

use leptos::prelude::*;

use crate::api::ApiService;
use crate::components::boutique::PageBoutique;
use crate::components::clients::PageClients;
use crate::components::commandes::PageCommandes;
use crate::components::dashboard::PageDashboard;
use crate::components::layout::AppShell;
use crate::components::mes_commandes::PageMesCommandes;
use crate::components::produits::PageProduits;
use crate::components::profil::PageProfil;
use crate::session::SessionContexte;
use crate::web::route::Route;
use crate::web::router::{Router, RouterOutlet};

/// Correspondance route -> vue.
///
/// L'accueil rend la boutique : un utilisateur connecté qui y arrive est
/// redirigé vers le tableau de bord par le routeur avant d'en voir le
/// contenu.
fn correspondance_route(route: Route) -> AnyView {
    match route {
        Route::Accueil | Route::Boutique => view! { <PageBoutique /> }.into_any(),
        Route::Produits => view! { <PageProduits /> }.into_any(),
        Route::MesCommandes => view! { <PageMesCommandes /> }.into_any(),
        Route::Profil => view! { <PageProfil /> }.into_any(),
        Route::Dashboard => view! { <PageDashboard /> }.into_any(),
        Route::Clients => view! { <PageClients /> }.into_any(),
        Route::Commandes => view! { <PageCommandes /> }.into_any(),
        Route::Introuvable => view! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page non trouvée"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. Magasin de session, hydraté depuis le stockage durable avant que
    //    le routeur n'évalue la première route.
    let session = SessionContexte::new();
    provide_context(session);
    session.hydrater();

    // 2. Client HTTP : le rappel 401 invalide la session ; la bascule du
    //    signal ci-dessous déclenche la redirection côté routeur.
    let api = ApiService::new(move || session.invalider());
    provide_context(api);

    // 3. Signal injecté dans le routeur pour la garde (découplage).
    let est_authentifie = session.signal_authentifie();

    view! {
        <Router est_authentifie=est_authentifie>
            <AppShell>
                <RouterOutlet matcher=correspondance_route />
            </AppShell>
        </Router>
    }
}
