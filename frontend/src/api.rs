//! Couche d'accès HTTP aux services REST
//!
//! Centralise le comportement transversal de chaque appel backend :
//! - un client logique par service (clients, produits, commandes), chacun
//!   avec son URL de base, le délai fixe et le budget de tentatives ;
//! - injection du jeton porteur depuis le stockage durable en sortie ;
//! - classement des échecs en entrée : un 401 efface la paire de session,
//!   prévient le magasin de session par le rappel injecté, puis remonte
//!   quand même l'erreur à l'appelant — jamais récupérable localement.
//!
//! La couche transport ne navigue jamais : la redirection après 401 est
//! l'affaire du routeur, déclenchée par la bascule du signal de session.

use std::sync::Arc;

use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use payetonkawa_shared::{DemandeConnexion, DemandeInscription, ReponseAuth, CLE_JETON};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config;
use crate::web::storage;
use crate::web::LocalStorage;

#[cfg(test)]
mod tests;

// =========================================================
// Services et méthodes
// =========================================================

/// Service REST de destination d'une requête.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Clients,
    Produits,
    Commandes,
}

impl Service {
    /// Nom du service, utilisé dans les journaux et la sonde de santé.
    pub fn nom(&self) -> &'static str {
        match self {
            Service::Clients => "clients",
            Service::Produits => "produits",
            Service::Commandes => "commandes",
        }
    }

    fn base(&self) -> &'static str {
        match self {
            Service::Clients => config::URL_CLIENTS,
            Service::Produits => config::URL_PRODUITS,
            Service::Commandes => config::URL_COMMANDES,
        }
    }

    fn url(&self, chemin: &str) -> String {
        format!("{}{}", self.base(), chemin)
    }
}

/// Méthode HTTP d'un appel de service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Methode {
    Get,
    Post,
    Put,
    Delete,
}

// =========================================================
// Erreurs
// =========================================================

/// Échec d'un appel backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErreurApi {
    /// Échec de transport (réseau injoignable, requête interrompue).
    Reseau(String),
    /// Aucune réponse dans le délai imparti.
    DelaiDepasse,
    /// Réponse 401 : la session a été invalidée.
    NonAutorise,
    /// Statut HTTP d'erreur autre que 401.
    Statut(u16),
    /// Corps de réponse illisible.
    Deserialisation(String),
    /// La requête n'a pas pu être construite.
    Construction(String),
}

impl ErreurApi {
    /// Classe un statut HTTP d'erreur.
    pub fn depuis_statut(statut: u16) -> Self {
        if statut == 401 {
            ErreurApi::NonAutorise
        } else {
            ErreurApi::Statut(statut)
        }
    }

    /// Seuls les échecs de transport sont rejoués, dans le budget fixe.
    /// Un statut d'erreur HTTP est une réponse, pas une panne.
    pub fn est_rejouable(&self) -> bool {
        matches!(self, ErreurApi::Reseau(_) | ErreurApi::DelaiDepasse)
    }
}

impl core::fmt::Display for ErreurApi {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ErreurApi::Reseau(detail) => write!(f, "erreur réseau : {detail}"),
            ErreurApi::DelaiDepasse => write!(f, "délai d'attente dépassé"),
            ErreurApi::NonAutorise => write!(f, "session expirée, reconnexion nécessaire"),
            ErreurApi::Statut(code) => write!(f, "le service a répondu {code}"),
            ErreurApi::Deserialisation(detail) => write!(f, "réponse illisible : {detail}"),
            ErreurApi::Construction(detail) => write!(f, "requête invalide : {detail}"),
        }
    }
}

impl std::error::Error for ErreurApi {}

// =========================================================
// Construction et envoi
// =========================================================

fn construire_requete(
    methode: Methode,
    url: &str,
    query: &[(&str, String)],
    corps_json: Option<&str>,
) -> Result<Request, ErreurApi> {
    let mut constructeur = match methode {
        Methode::Get => Request::get(url),
        Methode::Post => Request::post(url),
        Methode::Put => Request::put(url),
        Methode::Delete => Request::delete(url),
    };

    if !query.is_empty() {
        constructeur = constructeur.query(query.iter().map(|(cle, valeur)| (*cle, valeur.as_str())));
    }

    // Jeton porteur si une session est persistée, sinon appel anonyme.
    if let Some(jeton) = LocalStorage::get(CLE_JETON) {
        constructeur = constructeur.header("Authorization", &format!("Bearer {jeton}"));
    }

    match corps_json {
        Some(json) => constructeur
            .header("Content-Type", "application/json")
            .body(json.to_string())
            .map_err(|e| ErreurApi::Construction(e.to_string())),
        None => constructeur
            .build()
            .map_err(|e| ErreurApi::Construction(e.to_string())),
    }
}

/// Envoie la requête en la faisant courir contre le délai fixe.
async fn envoyer_avec_delai(requete: Request) -> Result<Response, ErreurApi> {
    let envoi = requete.send();
    let delai = TimeoutFuture::new(config::DELAI_REQUETE_MS);
    futures::pin_mut!(envoi, delai);

    match select(envoi, delai).await {
        Either::Left((resultat, _)) => resultat.map_err(|e| ErreurApi::Reseau(e.to_string())),
        Either::Right(_) => Err(ErreurApi::DelaiDepasse),
    }
}

/// Boucle de tentatives : la requête est reconstruite à chaque essai pour
/// relire le jeton courant.
async fn executer_requete(
    nom_service: &str,
    construire: &dyn Fn() -> Result<Request, ErreurApi>,
) -> Result<Response, ErreurApi> {
    let mut tentative = 0;
    loop {
        tentative += 1;
        let requete = construire()?;
        match envoyer_avec_delai(requete).await {
            Ok(reponse) => return Ok(reponse),
            Err(erreur) if erreur.est_rejouable() && tentative < config::TENTATIVES_MAX => {
                log::debug!("{nom_service}: tentative {tentative} échouée ({erreur}), nouvel essai");
            }
            Err(erreur) => return Err(erreur),
        }
    }
}

async fn decoder<T: DeserializeOwned>(nom_service: &str, reponse: Response) -> Result<T, ErreurApi> {
    reponse.json::<T>().await.map_err(|e| {
        let erreur = ErreurApi::Deserialisation(e.to_string());
        log::error!("Erreur API {nom_service}: {erreur}");
        erreur
    })
}

// =========================================================
// Client de services
// =========================================================

/// État de joignabilité des trois services backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanteServices {
    pub clients: bool,
    pub produits: bool,
    pub commandes: bool,
}

impl SanteServices {
    /// Paires (nom de service, joignable), dans l'ordre d'affichage.
    pub fn entrees(&self) -> [(&'static str, bool); 3] {
        [
            ("clients", self.clients),
            ("produits", self.produits),
            ("commandes", self.commandes),
        ]
    }
}

/// Client HTTP partagé de l'application.
///
/// Une seule instance est fournie au contexte par la racine de
/// composition ; le rappel `non_autorise` y est injecté par le magasin de
/// session.
#[derive(Clone)]
pub struct ApiService {
    non_autorise: Arc<dyn Fn() + Send + Sync>,
}

impl ApiService {
    pub fn new(non_autorise: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            non_autorise: Arc::new(non_autorise),
        }
    }

    /// Classement du statut de réponse. Le 401 efface la paire de session
    /// persistée et prévient le magasin de session ; l'erreur remonte
    /// ensuite à l'appelant.
    fn traiter_statut(&self, reponse: &Response) -> Result<(), ErreurApi> {
        if reponse.ok() {
            return Ok(());
        }
        let erreur = ErreurApi::depuis_statut(reponse.status());
        if erreur == ErreurApi::NonAutorise {
            storage::effacer_session();
            (self.non_autorise)();
        }
        Err(erreur)
    }

    async fn appeler(
        &self,
        service: Service,
        methode: Methode,
        chemin: &str,
        query: &[(&str, String)],
        corps_json: Option<String>,
    ) -> Result<Response, ErreurApi> {
        let url = service.url(chemin);
        let resultat = executer_requete(service.nom(), &|| {
            construire_requete(methode, &url, query, corps_json.as_deref())
        })
        .await
        .and_then(|reponse| self.traiter_statut(&reponse).map(|()| reponse));

        resultat.map_err(|erreur| {
            log::error!("Erreur API {}: {erreur}", service.nom());
            erreur
        })
    }

    /// `GET` avec paramètres de requête, corps décodé en `T`.
    pub async fn obtenir<T: DeserializeOwned>(
        &self,
        service: Service,
        chemin: &str,
        query: &[(&str, String)],
    ) -> Result<T, ErreurApi> {
        let reponse = self.appeler(service, Methode::Get, chemin, query, None).await?;
        decoder(service.nom(), reponse).await
    }

    /// `POST`/`PUT` d'un corps JSON, réponse décodée en `T`.
    pub async fn envoyer<B: Serialize, T: DeserializeOwned>(
        &self,
        service: Service,
        methode: Methode,
        chemin: &str,
        corps: &B,
    ) -> Result<T, ErreurApi> {
        let json =
            serde_json::to_string(corps).map_err(|e| ErreurApi::Construction(e.to_string()))?;
        let reponse = self.appeler(service, methode, chemin, &[], Some(json)).await?;
        decoder(service.nom(), reponse).await
    }

    /// `DELETE`. Le corps de réponse n'est pas interprété.
    pub async fn supprimer(&self, service: Service, chemin: &str) -> Result<(), ErreurApi> {
        self.appeler(service, Methode::Delete, chemin, &[], None)
            .await
            .map(|_| ())
    }

    // ---------------------------------------------------------
    // Authentification
    // ---------------------------------------------------------

    /// `POST .../auth/login`.
    pub async fn connexion(
        &self,
        email: &str,
        mot_de_passe: &str,
    ) -> Result<ReponseAuth, ErreurApi> {
        let corps = DemandeConnexion {
            email: email.to_string(),
            password: mot_de_passe.to_string(),
        };
        self.authentifier("/auth/login", &corps).await
    }

    /// `POST .../auth/register`. La réponse est identique à la connexion :
    /// l'inscription authentifie immédiatement.
    pub async fn inscription(
        &self,
        demande: &DemandeInscription,
    ) -> Result<ReponseAuth, ErreurApi> {
        self.authentifier("/auth/register", demande).await
    }

    /// Un refus du service d'authentification n'est pas une invalidation
    /// de session : pas d'effacement ni de rappel ici, une seule tentative.
    async fn authentifier<B: Serialize>(
        &self,
        chemin: &str,
        corps: &B,
    ) -> Result<ReponseAuth, ErreurApi> {
        let url = format!("{}{}", config::URL_AUTH, chemin);
        let json =
            serde_json::to_string(corps).map_err(|e| ErreurApi::Construction(e.to_string()))?;
        let requete = construire_requete(Methode::Post, &url, &[], Some(&json))?;

        let reponse = envoyer_avec_delai(requete).await.map_err(|erreur| {
            log::error!("Erreur API auth: {erreur}");
            erreur
        })?;

        if !reponse.ok() {
            // Le corps d'erreur n'est jamais interprété pour l'affichage,
            // seulement journalisé pour le diagnostic.
            let brut = reponse.text().await.unwrap_or_default();
            log::error!("Erreur API auth ({}): {brut}", reponse.status());
            return Err(ErreurApi::Statut(reponse.status()));
        }

        decoder("auth", reponse).await
    }

    // ---------------------------------------------------------
    // Sonde de santé
    // ---------------------------------------------------------

    /// Interroge `GET /health` sur chaque service, isolément : l'échec de
    /// l'un n'affecte jamais la sonde des autres.
    pub async fn verifier_sante(&self) -> SanteServices {
        SanteServices {
            clients: sonder(Service::Clients).await,
            produits: sonder(Service::Produits).await,
            commandes: sonder(Service::Commandes).await,
        }
    }
}

async fn sonder(service: Service) -> bool {
    let requete = match construire_requete(Methode::Get, &service.url("/health"), &[], None) {
        Ok(requete) => requete,
        Err(_) => return false,
    };
    match envoyer_avec_delai(requete).await {
        Ok(reponse) => reponse.ok(),
        Err(erreur) => {
            log::debug!("service {} injoignable : {erreur}", service.nom());
            false
        }
    }
}

/// Client HTTP depuis le contexte.
pub fn use_api() -> ApiService {
    use_context::<ApiService>().expect("ApiService absent du contexte : fourni par App")
}

// =========================================================
// Suivi des requêtes en vol
// =========================================================

/// Compteur de génération des chargements d'une page.
///
/// Chaque chargement prend un numéro via [`demarrer`] ; une fois la
/// réponse arrivée, la page ne l'applique que si [`est_courante`] — une
/// réponse dépassée par un chargement plus récent est jetée au lieu
/// d'écraser l'état le plus frais.
///
/// [`demarrer`]: GenerationRequetes::demarrer
/// [`est_courante`]: GenerationRequetes::est_courante
#[derive(Clone, Copy)]
pub struct GenerationRequetes {
    courante: RwSignal<u64>,
}

impl GenerationRequetes {
    pub fn new() -> Self {
        Self {
            courante: RwSignal::new(0),
        }
    }

    /// Ouvre une génération et rend son numéro.
    pub fn demarrer(&self) -> u64 {
        self.courante.update(|g| *g += 1);
        self.courante.get_untracked()
    }

    /// La génération `generation` est-elle toujours la plus récente ?
    pub fn est_courante(&self, generation: u64) -> bool {
        self.courante.get_untracked() == generation
    }
}

impl Default for GenerationRequetes {
    fn default() -> Self {
        Self::new()
    }
}
