use super::*;

const TOUTES: [Route; 9] = [
    Route::Accueil,
    Route::Boutique,
    Route::Produits,
    Route::MesCommandes,
    Route::Profil,
    Route::Dashboard,
    Route::Clients,
    Route::Commandes,
    Route::Introuvable,
];

#[test]
fn chemin_et_route_font_l_aller_retour() {
    for route in TOUTES {
        if route == Route::Introuvable {
            continue;
        }
        assert_eq!(Route::depuis_chemin(route.vers_chemin()), route);
    }
}

#[test]
fn chemin_inconnu_tombe_sur_introuvable() {
    assert_eq!(Route::depuis_chemin("/analytics"), Route::Introuvable);
    assert_eq!(Route::depuis_chemin("/boutique/"), Route::Introuvable);
    assert_eq!(Route::depuis_chemin(""), Route::Introuvable);
}

#[test]
fn seule_la_zone_d_administration_est_gardee() {
    let gardees: Vec<Route> = TOUTES
        .into_iter()
        .filter(Route::exige_authentification)
        .collect();
    assert_eq!(gardees, vec![Route::Dashboard, Route::Clients, Route::Commandes]);

    // L'historique et le profil sont contrôlés au niveau page, pas par le
    // routeur : l'état non authentifié n'y expose aucun contenu pour autant.
    assert!(!Route::MesCommandes.exige_authentification());
    assert!(!Route::Profil.exige_authentification());
}

#[test]
fn l_accueil_redirige_les_utilisateurs_connectes() {
    for route in TOUTES {
        assert_eq!(route.redirige_si_authentifie(), route == Route::Accueil);
    }
}

#[test]
fn cibles_de_redirection() {
    assert_eq!(Route::cible_acces_refuse(), Route::Accueil);
    assert_eq!(Route::cible_apres_connexion(), Route::Dashboard);
}

#[test]
fn affichage_par_chemin() {
    assert_eq!(Route::MesCommandes.to_string(), "/mes-commandes");
    assert_eq!(Route::Introuvable.to_string(), "/404");
}
