//! Modèles de domaine PayeTonKawa
//!
//! Types partagés entre les pages et la couche d'accès aux services REST :
//! - `Produit`, `Client`, `Commande` : enregistrements métier au format wire
//! - `Utilisateur` et charges utiles d'authentification
//! - `catalogue` : filtrage pur du catalogue
//! - `validation` : contrôles d'inscription avant tout appel réseau

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod catalogue;
pub mod validation;

#[cfg(test)]
mod tests;

// =========================================================
// Constantes
// =========================================================

/// Clé de stockage durable du jeton porteur.
pub const CLE_JETON: &str = "auth_token";
/// Clé de stockage durable de l'enregistrement utilisateur (JSON).
///
/// Les deux clés sont toujours écrites ensemble et effacées ensemble.
pub const CLE_UTILISATEUR: &str = "user_data";

// =========================================================
// Utilisateur et comptes
// =========================================================

/// Type de compte client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeCompte {
    Particulier,
    Professionnel,
}

impl TypeCompte {
    pub fn libelle(&self) -> &'static str {
        match self {
            TypeCompte::Particulier => "Particulier",
            TypeCompte::Professionnel => "Professionnel",
        }
    }
}

/// Utilisateur connecté, tel que renvoyé par le service d'authentification
/// et persisté sous [`CLE_UTILISATEUR`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utilisateur {
    pub id: String,
    pub nom: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adresse: Option<String>,
    #[serde(rename = "type")]
    pub type_compte: TypeCompte,
}

// =========================================================
// Authentification
// =========================================================

/// Identifiants envoyés à `POST .../auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandeConnexion {
    pub email: String,
    pub password: String,
}

/// Réponse des deux points d'entrée d'authentification : `{token, user}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReponseAuth {
    pub token: String,
    #[serde(rename = "user")]
    pub utilisateur: Utilisateur,
}

/// Rôle déclaré à l'inscription (valeurs wire attendues par le backend).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Professionnel,
    Particulier,
    #[serde(rename = "admin")]
    Admin,
}

/// Volet société d'une inscription professionnelle.
///
/// Sérialisé en objet vide `{}` pour un particulier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entreprise {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub siret: Option<String>,
}

/// Adresse postale d'inscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdresseInscription {
    pub line1: String,
    pub line2: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
}

impl Default for AdresseInscription {
    fn default() -> Self {
        Self {
            line1: String::new(),
            line2: String::new(),
            postal_code: String::new(),
            city: String::new(),
            country: "France".to_string(),
        }
    }
}

/// Profil complet envoyé à `POST .../auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandeInscription {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub role: Role,
    pub company: Entreprise,
    pub address: AdresseInscription,
}

// =========================================================
// Catalogue
// =========================================================

/// Produit du catalogue. Lecture seule côté interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Produit {
    pub id: String,
    pub nom: String,
    pub description: String,
    pub prix: f64,
    pub stock: u32,
    pub origine: String,
    /// Intensité de torréfaction, de 1 à 5.
    pub intensite: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub actif: bool,
    pub date_creation: DateTime<Utc>,
}

// =========================================================
// Clients (fiche d'administration, distincte de `Utilisateur`)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub nom: String,
    pub email: String,
    pub telephone: String,
    pub adresse: String,
    #[serde(rename = "type")]
    pub type_compte: TypeCompte,
    pub date_creation: DateTime<Utc>,
    pub actif: bool,
}

// =========================================================
// Commandes
// =========================================================

/// Statut du cycle de vie d'une commande (noms wire en snake_case).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatutCommande {
    EnAttente,
    Confirmee,
    EnPreparation,
    Expediee,
    Livree,
    Annulee,
}

impl StatutCommande {
    /// Libellé affiché à l'utilisateur.
    pub fn libelle(&self) -> &'static str {
        match self {
            StatutCommande::EnAttente => "En attente",
            StatutCommande::Confirmee => "Confirmée",
            StatutCommande::EnPreparation => "En préparation",
            StatutCommande::Expediee => "Expédiée",
            StatutCommande::Livree => "Livrée",
            StatutCommande::Annulee => "Annulée",
        }
    }

    /// Nom wire du statut, pour les paramètres de requête.
    /// Doit rester aligné sur la représentation serde.
    pub fn code(&self) -> &'static str {
        match self {
            StatutCommande::EnAttente => "en_attente",
            StatutCommande::Confirmee => "confirmee",
            StatutCommande::EnPreparation => "en_preparation",
            StatutCommande::Expediee => "expediee",
            StatutCommande::Livree => "livree",
            StatutCommande::Annulee => "annulee",
        }
    }

    /// Tous les statuts, dans l'ordre du cycle de vie.
    pub fn tous() -> [StatutCommande; 6] {
        [
            StatutCommande::EnAttente,
            StatutCommande::Confirmee,
            StatutCommande::EnPreparation,
            StatutCommande::Expediee,
            StatutCommande::Livree,
            StatutCommande::Annulee,
        ]
    }

    /// Une commande est « en cours » tant qu'elle n'est ni livrée ni annulée.
    pub fn est_en_cours(&self) -> bool {
        matches!(
            self,
            StatutCommande::EnAttente
                | StatutCommande::Confirmee
                | StatutCommande::EnPreparation
                | StatutCommande::Expediee
        )
    }
}

/// Projection minimale d'un produit embarquée dans une ligne de commande.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProduitResume {
    pub nom: String,
}

/// Ligne de commande. Le prix unitaire est figé au moment de la commande.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandeProduit {
    pub produit_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub produit: Option<ProduitResume>,
    pub quantite: u32,
    pub prix_unitaire: f64,
}

/// Commande telle que renvoyée par le service commandes.
///
/// `total` est calculé en amont par le backend ; l'historique de commandes
/// ne le redérive jamais côté client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commande {
    pub id: String,
    pub client_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<Client>,
    pub produits: Vec<CommandeProduit>,
    pub statut: StatutCommande,
    pub total: f64,
    pub date_commande: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_livraison: Option<DateTime<Utc>>,
    pub adresse_livraison: String,
}

// =========================================================
// Charges utiles de création (l'identifiant et la date de création
// sont attribués par le backend)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NouveauProduit {
    pub nom: String,
    pub description: String,
    pub prix: f64,
    pub stock: u32,
    pub origine: String,
    pub intensite: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub actif: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NouveauClient {
    pub nom: String,
    pub email: String,
    pub telephone: String,
    pub adresse: String,
    #[serde(rename = "type")]
    pub type_compte: TypeCompte,
    pub actif: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NouvelleCommande {
    pub client_id: String,
    pub produits: Vec<CommandeProduit>,
    pub statut: StatutCommande,
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_livraison: Option<DateTime<Utc>>,
    pub adresse_livraison: String,
}

// =========================================================
// Enveloppes de réponse
// =========================================================

/// Enveloppe standard des services REST.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReponseApi<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub success: bool,
}

/// Enveloppe des listes paginées.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReponsePaginee<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

/// Agrégats du tableau de bord (`GET /api/commandes/stats`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDashboard {
    pub total_clients: u64,
    pub total_produits: u64,
    pub total_commandes: u64,
    pub chiffre_affaires: f64,
    pub commandes_recentes: Vec<Commande>,
}
