use super::*;

// =========================================================
// Statut de commande — format wire et cycle de vie
// =========================================================

#[test]
fn statuts_serialises_en_snake_case() {
    let cas = [
        (StatutCommande::EnAttente, "\"en_attente\""),
        (StatutCommande::Confirmee, "\"confirmee\""),
        (StatutCommande::EnPreparation, "\"en_preparation\""),
        (StatutCommande::Expediee, "\"expediee\""),
        (StatutCommande::Livree, "\"livree\""),
        (StatutCommande::Annulee, "\"annulee\""),
    ];
    for (statut, wire) in cas {
        assert_eq!(serde_json::to_string(&statut).unwrap(), wire);
        assert_eq!(
            serde_json::from_str::<StatutCommande>(wire).unwrap(),
            statut
        );
    }
}

#[test]
fn le_code_wire_suit_la_representation_serde() {
    for statut in StatutCommande::tous() {
        let serde = serde_json::to_string(&statut).unwrap();
        assert_eq!(serde, format!("\"{}\"", statut.code()));
    }
}

#[test]
fn statuts_en_cours() {
    assert!(StatutCommande::EnAttente.est_en_cours());
    assert!(StatutCommande::Confirmee.est_en_cours());
    assert!(StatutCommande::EnPreparation.est_en_cours());
    assert!(StatutCommande::Expediee.est_en_cours());
    assert!(!StatutCommande::Livree.est_en_cours());
    assert!(!StatutCommande::Annulee.est_en_cours());
}

// =========================================================
// Authentification
// =========================================================

#[test]
fn reponse_auth_se_deserialise() {
    let json = r#"{
        "token": "t1",
        "user": {
            "id": "u1",
            "nom": "Marie Dubois",
            "email": "marie@exemple.fr",
            "type": "particulier"
        }
    }"#;
    let reponse: ReponseAuth = serde_json::from_str(json).unwrap();
    assert_eq!(reponse.token, "t1");
    assert_eq!(reponse.utilisateur.id, "u1");
    assert_eq!(reponse.utilisateur.type_compte, TypeCompte::Particulier);
    assert_eq!(reponse.utilisateur.telephone, None);
}

#[test]
fn utilisateur_persiste_fait_l_aller_retour() {
    let utilisateur = Utilisateur {
        id: "u1".to_string(),
        nom: "Café Central".to_string(),
        email: "contact@cafecentral.fr".to_string(),
        telephone: Some("0102030405".to_string()),
        adresse: Some("123 Rue de la Paix, 75001 Paris".to_string()),
        type_compte: TypeCompte::Professionnel,
    };
    let json = serde_json::to_string(&utilisateur).unwrap();
    assert!(json.contains("\"type\":\"professionnel\""));
    assert_eq!(serde_json::from_str::<Utilisateur>(&json).unwrap(), utilisateur);
}

#[test]
fn inscription_particulier_envoie_une_societe_vide() {
    let demande = DemandeInscription {
        last_name: "Martin".to_string(),
        first_name: "Pierre".to_string(),
        email: "pierre@exemple.fr".to_string(),
        password: "kawa1234".to_string(),
        phone: String::new(),
        role: Role::Particulier,
        company: Entreprise::default(),
        address: AdresseInscription::default(),
    };
    let json = serde_json::to_string(&demande).unwrap();
    assert!(json.contains("\"company\":{}"));
    assert!(json.contains("\"role\":\"Particulier\""));
    assert!(json.contains("\"country\":\"France\""));
}

// =========================================================
// Enregistrements métier — casse des champs wire
// =========================================================

#[test]
fn commande_se_deserialise_du_format_backend() {
    let json = r#"{
        "id": "c1",
        "clientId": "u1",
        "produits": [
            {"produitId": "p1", "produit": {"nom": "Arabica Éthiopie"}, "quantite": 2, "prixUnitaire": 24.90}
        ],
        "statut": "en_preparation",
        "total": 49.80,
        "dateCommande": "2024-01-15T10:30:00Z",
        "adresseLivraison": "45 Avenue des Champs, 69001 Lyon"
    }"#;
    let commande: Commande = serde_json::from_str(json).unwrap();
    assert_eq!(commande.client_id, "u1");
    assert_eq!(commande.statut, StatutCommande::EnPreparation);
    assert_eq!(commande.date_livraison, None);
    assert_eq!(commande.produits[0].prix_unitaire, 24.90);
    assert_eq!(
        commande.produits[0].produit.as_ref().unwrap().nom,
        "Arabica Éthiopie"
    );
}

#[test]
fn reponse_paginee_expose_total_pages() {
    let json = r#"{"data": [], "total": 42, "page": 2, "limit": 10, "totalPages": 5}"#;
    let page: ReponsePaginee<Produit> = serde_json::from_str(json).unwrap();
    assert_eq!(page.total, 42);
    assert_eq!(page.total_pages, 5);
}

#[test]
fn stats_dashboard_se_deserialisent() {
    let json = r#"{
        "totalClients": 156,
        "totalProduits": 24,
        "totalCommandes": 89,
        "chiffreAffaires": 12450.50,
        "commandesRecentes": []
    }"#;
    let stats: StatsDashboard = serde_json::from_str(json).unwrap();
    assert_eq!(stats.total_clients, 156);
    assert_eq!(stats.chiffre_affaires, 12450.50);
    assert!(stats.commandes_recentes.is_empty());
}
