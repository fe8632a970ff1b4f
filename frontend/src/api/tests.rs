use super::*;

// =========================================================
// Classement des erreurs
// =========================================================

#[test]
fn le_401_est_classe_non_autorise() {
    assert_eq!(ErreurApi::depuis_statut(401), ErreurApi::NonAutorise);
}

#[test]
fn les_autres_statuts_restent_des_statuts() {
    assert_eq!(ErreurApi::depuis_statut(404), ErreurApi::Statut(404));
    assert_eq!(ErreurApi::depuis_statut(500), ErreurApi::Statut(500));
    assert_eq!(ErreurApi::depuis_statut(403), ErreurApi::Statut(403));
}

#[test]
fn seul_le_transport_est_rejouable() {
    assert!(ErreurApi::Reseau("connexion refusée".into()).est_rejouable());
    assert!(ErreurApi::DelaiDepasse.est_rejouable());

    // Une réponse HTTP, même en erreur, n'est pas rejouée.
    assert!(!ErreurApi::NonAutorise.est_rejouable());
    assert!(!ErreurApi::Statut(500).est_rejouable());
    assert!(!ErreurApi::Deserialisation("EOF".into()).est_rejouable());
    assert!(!ErreurApi::Construction("URL vide".into()).est_rejouable());
}

#[test]
fn messages_d_erreur_en_francais() {
    assert_eq!(ErreurApi::DelaiDepasse.to_string(), "délai d'attente dépassé");
    assert_eq!(ErreurApi::Statut(503).to_string(), "le service a répondu 503");
}

// =========================================================
// Services
// =========================================================

#[test]
fn noms_des_services() {
    assert_eq!(Service::Clients.nom(), "clients");
    assert_eq!(Service::Produits.nom(), "produits");
    assert_eq!(Service::Commandes.nom(), "commandes");
}

#[test]
fn entrees_de_sante_isolees_par_service() {
    // L'échec d'un service n'entraîne pas les autres.
    let sante = SanteServices {
        clients: true,
        produits: false,
        commandes: true,
    };
    assert_eq!(
        sante.entrees(),
        [("clients", true), ("produits", false), ("commandes", true)]
    );
}

// =========================================================
// Générations de requêtes
// =========================================================

#[test]
fn une_generation_plus_recente_perime_l_ancienne() {
    let generations = GenerationRequetes::new();

    let premiere = generations.demarrer();
    assert!(generations.est_courante(premiere));

    // Un second chargement démarre avant la fin du premier : la réponse
    // du premier devra être jetée.
    let seconde = generations.demarrer();
    assert!(!generations.est_courante(premiere));
    assert!(generations.est_courante(seconde));
}

#[test]
fn les_generations_sont_croissantes() {
    let generations = GenerationRequetes::new();
    let a = generations.demarrer();
    let b = generations.demarrer();
    let c = generations.demarrer();
    assert!(a < b && b < c);
}
