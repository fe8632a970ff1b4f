//! Magasin de session
//!
//! Source de vérité unique sur l'acteur courant, partagée par le contexte
//! Leptos. L'état n'est modifié que par les opérations définies ici :
//! hydratation au démarrage, connexion, inscription, déconnexion et
//! invalidation sur 401. Le routeur observe le signal d'authentification ;
//! la session ne navigue jamais elle-même.

use leptos::prelude::*;
use payetonkawa_shared::validation::{valider_inscription, ErreurValidation};
use payetonkawa_shared::{DemandeInscription, Utilisateur};

use crate::api::{ApiService, ErreurApi};
use crate::web::storage;

/// État de session.
#[derive(Clone, Default)]
pub struct SessionEtat {
    /// Utilisateur connecté, `None` pour un visiteur anonyme.
    pub utilisateur: Option<Utilisateur>,
    /// `true` tant que l'hydratation initiale n'a pas eu lieu — distinct
    /// de « hydraté, personne de connecté ».
    pub chargement: bool,
    /// Visibilité de la modale de connexion (état de présentation).
    pub modale_connexion: bool,
}

/// Contexte de session : paire de signaux partagée par `provide_context`.
#[derive(Clone, Copy)]
pub struct SessionContexte {
    pub etat: ReadSignal<SessionEtat>,
    fixer_etat: WriteSignal<SessionEtat>,
}

impl SessionContexte {
    pub fn new() -> Self {
        let (etat, fixer_etat) = signal(SessionEtat {
            chargement: true,
            ..SessionEtat::default()
        });
        Self { etat, fixer_etat }
    }

    /// Signal dérivé injecté dans le routeur.
    pub fn signal_authentifie(&self) -> Signal<bool> {
        let etat = self.etat;
        Signal::derive(move || etat.get().utilisateur.is_some())
    }

    /// Hydrate la session depuis le stockage durable.
    ///
    /// Une entrée utilisateur corrompue est journalisée puis jetée avec le
    /// jeton : la session démarre alors anonyme.
    pub fn hydrater(&self) {
        let utilisateur = match storage::lire_session() {
            Some((_jeton, donnees)) => match serde_json::from_str::<Utilisateur>(&donnees) {
                Ok(utilisateur) => Some(utilisateur),
                Err(erreur) => {
                    log::error!("Enregistrement utilisateur corrompu, entrées jetées : {erreur}");
                    storage::effacer_session();
                    None
                }
            },
            None => None,
        };

        self.fixer_etat.update(|etat| {
            etat.utilisateur = utilisateur;
            etat.chargement = false;
        });
    }

    /// Déconnexion : stockage et mémoire effacés d'un bloc, aucun appel
    /// serveur.
    pub fn deconnexion(&self) {
        storage::effacer_session();
        self.fixer_etat.update(|etat| etat.utilisateur = None);
    }

    /// Réaction au 401 de la couche transport. Le stockage a déjà été
    /// effacé par celle-ci ; on aligne l'état en mémoire, et la bascule du
    /// signal laisse le routeur ramener l'utilisateur à l'entrée.
    pub fn invalider(&self) {
        self.fixer_etat.update(|etat| etat.utilisateur = None);
    }

    pub fn ouvrir_modale(&self) {
        self.fixer_etat.update(|etat| etat.modale_connexion = true);
    }

    pub fn fermer_modale(&self) {
        self.fixer_etat.update(|etat| etat.modale_connexion = false);
    }

    /// Installe la session renvoyée par l'authentification : paire
    /// persistée puis état mémoire, modale refermée.
    fn installer(&self, jeton: &str, utilisateur: Utilisateur) -> Result<(), ErreurApi> {
        let json = serde_json::to_string(&utilisateur)
            .map_err(|e| ErreurApi::Deserialisation(e.to_string()))?;
        storage::ecrire_session(jeton, &json);
        self.fixer_etat.update(|etat| {
            etat.utilisateur = Some(utilisateur);
            etat.modale_connexion = false;
        });
        Ok(())
    }

    /// Répercute une mise à jour de profil sur la session persistée.
    /// Le jeton courant est conservé.
    pub fn mettre_a_jour_utilisateur(&self, utilisateur: Utilisateur) {
        if let Some((jeton, _)) = storage::lire_session() {
            if let Ok(json) = serde_json::to_string(&utilisateur) {
                storage::ecrire_session(&jeton, &json);
            }
        }
        self.fixer_etat.update(|etat| etat.utilisateur = Some(utilisateur));
    }
}

impl Default for SessionContexte {
    fn default() -> Self {
        Self::new()
    }
}

/// Contexte de session depuis l'arbre Leptos.
pub fn use_session() -> SessionContexte {
    use_context::<SessionContexte>().expect("SessionContexte absent du contexte : fourni par App")
}

// =========================================================
// Opérations d'authentification
// =========================================================

/// Échec d'une inscription : refus local de validation, ou échec d'appel.
#[derive(Debug, Clone, PartialEq)]
pub enum ErreurInscription {
    Validation(ErreurValidation),
    Api(ErreurApi),
}

impl core::fmt::Display for ErreurInscription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            // Les refus de validation s'affichent tels quels dans le
            // formulaire ; les échecs d'appel restent génériques.
            ErreurInscription::Validation(erreur) => write!(f, "{erreur}"),
            ErreurInscription::Api(_) => write!(f, "Erreur lors de l'inscription"),
        }
    }
}

/// Connexion par identifiants. En cas de succès la paire {jeton,
/// utilisateur} est persistée et l'état mémoire remplacé d'un bloc.
pub async fn connexion(
    session: &SessionContexte,
    api: &ApiService,
    email: &str,
    mot_de_passe: &str,
) -> Result<(), ErreurApi> {
    let reponse = api.connexion(email, mot_de_passe).await?;
    session.installer(&reponse.token, reponse.utilisateur)
}

/// Inscription. La validation locale passe avant tout appel réseau ; en
/// cas de succès, le parcours est identique à la connexion (l'inscription
/// authentifie immédiatement).
///
/// Une réponse du backend sans paire `{token, user}` exploitable — compte
/// créé mais jeton absent — est traitée comme un échec d'appel : rien
/// n'est persisté et la session reste anonyme.
pub async fn inscription(
    session: &SessionContexte,
    api: &ApiService,
    demande: &DemandeInscription,
    confirmation: &str,
) -> Result<(), ErreurInscription> {
    valider_inscription(demande, confirmation).map_err(ErreurInscription::Validation)?;

    let reponse = api
        .inscription(demande)
        .await
        .map_err(ErreurInscription::Api)?;
    session
        .installer(&reponse.token, reponse.utilisateur)
        .map_err(ErreurInscription::Api)
}
