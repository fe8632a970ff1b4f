//! Définition des routes - modèle de domaine
//!
//! Couche purement métier, sans dépendance au DOM : la table des routes de
//! l'application et leurs règles d'accès. Le service de routage
//! ([`super::router`]) consomme ces règles pour appliquer la garde.

use std::fmt::Display;

#[cfg(test)]
mod tests;

/// Routes de l'application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Page d'accueil : boutique pour un visiteur, redirection vers le
    /// tableau de bord pour un utilisateur connecté.
    #[default]
    Accueil,
    /// Boutique publique.
    Boutique,
    /// Catalogue complet en vue tableau.
    Produits,
    /// Historique de commandes du client connecté (contrôle au niveau page).
    MesCommandes,
    /// Profil du client connecté (contrôle au niveau page).
    Profil,
    /// Tableau de bord d'administration (gardé).
    Dashboard,
    /// Table d'administration des clients (gardée).
    Clients,
    /// Table d'administration des commandes (gardée).
    Commandes,
    /// Page inconnue.
    Introuvable,
}

impl Route {
    /// Résout un chemin d'URL en route.
    pub fn depuis_chemin(chemin: &str) -> Self {
        match chemin {
            "/" => Self::Accueil,
            "/boutique" => Self::Boutique,
            "/produits" => Self::Produits,
            "/mes-commandes" => Self::MesCommandes,
            "/profil" => Self::Profil,
            "/dashboard" => Self::Dashboard,
            "/clients" => Self::Clients,
            "/commandes" => Self::Commandes,
            _ => Self::Introuvable,
        }
    }

    /// Chemin d'URL de la route.
    pub fn vers_chemin(&self) -> &'static str {
        match self {
            Self::Accueil => "/",
            Self::Boutique => "/boutique",
            Self::Produits => "/produits",
            Self::MesCommandes => "/mes-commandes",
            Self::Profil => "/profil",
            Self::Dashboard => "/dashboard",
            Self::Clients => "/clients",
            Self::Commandes => "/commandes",
            Self::Introuvable => "/404",
        }
    }

    /// Règle de garde : la route exige-t-elle une session authentifiée ?
    pub fn exige_authentification(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Clients | Self::Commandes)
    }

    /// Un utilisateur authentifié doit-il être redirigé hors de cette
    /// route ? (L'accueil d'un client connecté est le tableau de bord.)
    pub fn redirige_si_authentifie(&self) -> bool {
        matches!(self, Self::Accueil)
    }

    /// Cible de redirection quand la garde refuse l'accès.
    pub fn cible_acces_refuse() -> Self {
        Self::Accueil
    }

    /// Cible de redirection d'un utilisateur authentifié quittant l'accueil.
    pub fn cible_apres_connexion() -> Self {
        Self::Dashboard
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.vers_chemin())
    }
}
