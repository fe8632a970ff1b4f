//! Configuration des services backend
//!
//! Table statique des URL de base et constantes de requête. Données pures,
//! aucune logique. Chaque URL peut être surchargée à la compilation par une
//! variable d'environnement (l'équivalent des variables d'environnement du
//! bundler dans l'ancienne boutique).

/// URL de base du service clients.
pub const URL_CLIENTS: &str = match option_env!("PAYETONKAWA_CLIENTS_URL") {
    Some(url) => url,
    None => "http://localhost:8081",
};

/// URL de base du service produits.
pub const URL_PRODUITS: &str = match option_env!("PAYETONKAWA_PRODUITS_URL") {
    Some(url) => url,
    None => "http://localhost:8082",
};

/// URL de base du service commandes.
pub const URL_COMMANDES: &str = match option_env!("PAYETONKAWA_COMMANDES_URL") {
    Some(url) => url,
    None => "http://localhost:8083",
};

/// URL de base du service d'authentification.
pub const URL_AUTH: &str = match option_env!("PAYETONKAWA_AUTH_URL") {
    Some(url) => url,
    None => "http://localhost:8081/payetonkawa/api/v1",
};

/// Délai maximal d'une tentative, en millisecondes.
pub const DELAI_REQUETE_MS: u32 = 10_000;

/// Budget fixe de tentatives pour les échecs de transport.
pub const TENTATIVES_MAX: u32 = 3;
