//! État du formulaire d'inscription
//!
//! Regroupe les signaux épars en une structure responsable de :
//! - la détention des champs,
//! - leur réinitialisation,
//! - la conversion vers la demande d'inscription.

use leptos::prelude::*;
use payetonkawa_shared::{AdresseInscription, DemandeInscription, Entreprise, Role, TypeCompte};

/// Champs du formulaire d'inscription.
///
/// `RwSignal` parce qu'il est `Copy` : la structure se passe telle quelle
/// entre composants.
#[derive(Clone, Copy)]
pub struct FormulaireInscription {
    pub nom: RwSignal<String>,
    pub prenom: RwSignal<String>,
    pub email: RwSignal<String>,
    pub telephone: RwSignal<String>,
    pub mot_de_passe: RwSignal<String>,
    pub confirmation: RwSignal<String>,
    pub type_compte: RwSignal<TypeCompte>,
    pub nom_societe: RwSignal<String>,
    pub siret: RwSignal<String>,
    pub ligne1: RwSignal<String>,
    pub ligne2: RwSignal<String>,
    pub code_postal: RwSignal<String>,
    pub ville: RwSignal<String>,
}

impl FormulaireInscription {
    pub fn new() -> Self {
        Self {
            nom: RwSignal::new(String::new()),
            prenom: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            telephone: RwSignal::new(String::new()),
            mot_de_passe: RwSignal::new(String::new()),
            confirmation: RwSignal::new(String::new()),
            type_compte: RwSignal::new(TypeCompte::Particulier),
            nom_societe: RwSignal::new(String::new()),
            siret: RwSignal::new(String::new()),
            ligne1: RwSignal::new(String::new()),
            ligne2: RwSignal::new(String::new()),
            code_postal: RwSignal::new(String::new()),
            ville: RwSignal::new(String::new()),
        }
    }

    /// Remet tous les champs à leur valeur initiale.
    pub fn reinitialiser(&self) {
        self.nom.set(String::new());
        self.prenom.set(String::new());
        self.email.set(String::new());
        self.telephone.set(String::new());
        self.mot_de_passe.set(String::new());
        self.confirmation.set(String::new());
        self.type_compte.set(TypeCompte::Particulier);
        self.nom_societe.set(String::new());
        self.siret.set(String::new());
        self.ligne1.set(String::new());
        self.ligne2.set(String::new());
        self.code_postal.set(String::new());
        self.ville.set(String::new());
    }

    /// Convertit l'état du formulaire en demande d'inscription.
    ///
    /// Le volet société n'est rempli que pour un compte professionnel ; un
    /// particulier envoie un objet vide. Le pays n'est pas modifiable.
    pub fn en_demande(&self) -> DemandeInscription {
        let professionnel = self.type_compte.get() == TypeCompte::Professionnel;

        let company = if professionnel {
            Entreprise {
                name: Some(self.nom_societe.get()),
                siret: Some(self.siret.get()),
            }
        } else {
            Entreprise::default()
        };

        DemandeInscription {
            last_name: self.nom.get(),
            first_name: self.prenom.get(),
            email: self.email.get(),
            password: self.mot_de_passe.get(),
            phone: self.telephone.get(),
            role: if professionnel {
                Role::Professionnel
            } else {
                Role::Particulier
            },
            company,
            address: AdresseInscription {
                line1: self.ligne1.get(),
                line2: self.ligne2.get(),
                postal_code: self.code_postal.get(),
                city: self.ville.get(),
                country: "France".to_string(),
            },
        }
    }
}

impl Default for FormulaireInscription {
    fn default() -> Self {
        Self::new()
    }
}
