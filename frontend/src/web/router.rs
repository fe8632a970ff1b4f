//! Service de routage
//!
//! Encapsule l'API History du navigateur : toute manipulation de
//! `window.history` passe par ce module. La navigation suit le flux
//! « demande -> garde -> chargement », et un effet observant le signal
//! d'authentification rejoue la garde quand la session apparaît ou
//! disparaît — c'est ainsi qu'un 401 finit sur la route d'entrée sans que
//! la couche transport touche à la navigation.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::Route;

/// Chemin courant du navigateur.
fn chemin_courant() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn empiler_historique(chemin: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(historique) = window.history() {
            let _ = historique.push_state_with_url(&JsValue::NULL, "", Some(chemin));
        }
    }
}

/// Variante `replaceState`, utilisée pour les redirections.
fn remplacer_historique(chemin: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(historique) = window.history() {
            let _ = historique.replace_state_with_url(&JsValue::NULL, "", Some(chemin));
        }
    }
}

/// Routeur de l'application.
///
/// Pilote l'interface par signal. Le signal d'authentification est injecté
/// par l'appelant : le routeur ne connaît pas la session, seulement un
/// booléen.
#[derive(Clone, Copy)]
pub struct Routeur {
    route_courante: ReadSignal<Route>,
    fixer_route: WriteSignal<Route>,
    est_authentifie: Signal<bool>,
}

impl Routeur {
    fn new(est_authentifie: Signal<bool>) -> Self {
        let route_initiale = Route::depuis_chemin(&chemin_courant());
        let (route_courante, fixer_route) = signal(route_initiale);

        Self {
            route_courante,
            fixer_route,
            est_authentifie,
        }
    }

    /// Route affichée.
    pub fn route_courante(&self) -> ReadSignal<Route> {
        self.route_courante
    }

    /// Navigation avec garde.
    pub fn naviguer(&self, chemin: &str) {
        self.naviguer_vers(Route::depuis_chemin(chemin), true);
    }

    fn naviguer_vers(&self, cible: Route, empiler: bool) {
        let est_auth = self.est_authentifie.get_untracked();

        // Garde : route protégée, visiteur anonyme.
        if cible.exige_authentification() && !est_auth {
            log::debug!("[routeur] accès refusé à {cible}, retour à l'accueil");
            self.rediriger(Route::cible_acces_refuse(), empiler);
            return;
        }

        // Un utilisateur connecté arrivant sur l'accueil part au tableau
        // de bord, comme la page d'accueil de l'ancienne boutique.
        if cible.redirige_si_authentifie() && est_auth {
            self.rediriger(Route::cible_apres_connexion(), empiler);
            return;
        }

        if empiler {
            empiler_historique(cible.vers_chemin());
        } else {
            remplacer_historique(cible.vers_chemin());
        }
        self.fixer_route.set(cible);
    }

    fn rediriger(&self, cible: Route, empiler: bool) {
        if empiler {
            empiler_historique(cible.vers_chemin());
        } else {
            remplacer_historique(cible.vers_chemin());
        }
        self.fixer_route.set(cible);
    }

    /// Écoute des boutons précédent/suivant du navigateur.
    ///
    /// La garde s'applique aussi au `popstate` : revenir en arrière ne
    /// rouvre pas une page protégée après déconnexion.
    fn ecouter_popstate(&self) {
        let fixer_route = self.fixer_route;
        let est_authentifie = self.est_authentifie;

        let fermeture = Closure::<dyn Fn()>::new(move || {
            let cible = Route::depuis_chemin(&chemin_courant());
            if cible.exige_authentification() && !est_authentifie.get_untracked() {
                let repli = Route::cible_acces_refuse();
                remplacer_historique(repli.vers_chemin());
                fixer_route.set(repli);
            } else {
                fixer_route.set(cible);
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", fermeture.as_ref().unchecked_ref());
        }

        // La fermeture doit survivre aussi longtemps que l'écouteur.
        fermeture.forget();
    }

    /// Rejoue la garde à chaque bascule du signal d'authentification.
    fn rediriger_sur_changement_auth(&self) {
        let route_courante = self.route_courante;
        let fixer_route = self.fixer_route;
        let est_authentifie = self.est_authentifie;

        Effect::new(move |_| {
            let est_auth = est_authentifie.get();
            let route = route_courante.get_untracked();

            if est_auth {
                if route.redirige_si_authentifie() {
                    let cible = Route::cible_apres_connexion();
                    empiler_historique(cible.vers_chemin());
                    fixer_route.set(cible);
                    log::debug!("[routeur] session ouverte, direction {cible}");
                }
            } else if route.exige_authentification() {
                let cible = Route::cible_acces_refuse();
                empiler_historique(cible.vers_chemin());
                fixer_route.set(cible);
                log::debug!("[routeur] session fermée, retour à {cible}");
            }
        });
    }
}

fn fournir_routeur(est_authentifie: Signal<bool>) -> Routeur {
    let routeur = Routeur::new(est_authentifie);
    routeur.ecouter_popstate();
    routeur.rediriger_sur_changement_auth();
    provide_context(routeur);
    routeur
}

/// Routeur depuis le contexte.
pub fn use_routeur() -> Routeur {
    use_context::<Routeur>().expect("Routeur absent du contexte : envelopper l'application dans <Router>")
}

// ============================================================================
// Composants
// ============================================================================

/// Racine du routeur, à placer au sommet de l'application.
#[component]
pub fn Router(
    /// Signal d'authentification injecté (découplage de la session).
    est_authentifie: Signal<bool>,
    /// Sous-arbre de l'application.
    children: Children,
) -> impl IntoView {
    fournir_routeur(est_authentifie);
    children()
}

/// Point de sortie : rend la vue associée à la route courante.
#[component]
pub fn RouterOutlet(
    /// Correspondance route -> vue.
    matcher: fn(Route) -> AnyView,
) -> impl IntoView {
    let routeur = use_routeur();

    move || {
        let courante = routeur.route_courante().get();
        matcher(courante)
    }
}

/// Lien interne : intercepte le clic et passe par la navigation gardée.
#[component]
pub fn Lien(
    /// Chemin de destination.
    #[prop(into)]
    vers: String,
    /// Contenu du lien.
    children: Children,
) -> impl IntoView {
    let routeur = use_routeur();

    let destination = vers.clone();
    let au_clic = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        routeur.naviguer(&destination);
    };

    view! {
        <a href=vers on:click=au_clic>
            {children()}
        </a>
    }
}
