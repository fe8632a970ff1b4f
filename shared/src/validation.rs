//! Contrôles d'inscription
//!
//! Validation purement locale, exécutée avant tout appel réseau. Un échec
//! ici n'atteint jamais le backend et s'affiche tel quel dans le
//! formulaire.

use crate::{DemandeInscription, Role};

#[cfg(test)]
mod tests;

/// Longueur minimale d'un SIRET/SIREN accepté.
pub const SIRET_LONGUEUR_MIN: usize = 9;
/// Longueur maximale d'un SIRET accepté.
pub const SIRET_LONGUEUR_MAX: usize = 14;

/// Échec de validation d'une inscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErreurValidation {
    MotsDePasseDifferents,
    NomSocieteManquant,
    SiretInvalide,
}

impl core::fmt::Display for ErreurValidation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ErreurValidation::MotsDePasseDifferents => {
                write!(f, "Les mots de passe ne correspondent pas")
            }
            ErreurValidation::NomSocieteManquant => {
                write!(
                    f,
                    "Le nom de la société est obligatoire pour les professionnels"
                )
            }
            ErreurValidation::SiretInvalide => {
                write!(
                    f,
                    "Le SIRET doit contenir entre {} et {} caractères",
                    SIRET_LONGUEUR_MIN, SIRET_LONGUEUR_MAX
                )
            }
        }
    }
}

impl std::error::Error for ErreurValidation {}

/// Valide une demande d'inscription avant envoi.
///
/// Vérifie la confirmation du mot de passe puis, pour un compte
/// professionnel, la présence d'un nom de société et la longueur du SIRET
/// (bornes incluses, espaces de bord ignorés).
pub fn valider_inscription(
    demande: &DemandeInscription,
    confirmation: &str,
) -> Result<(), ErreurValidation> {
    if demande.password != confirmation {
        return Err(ErreurValidation::MotsDePasseDifferents);
    }

    if demande.role == Role::Professionnel {
        let nom_societe = demande.company.name.as_deref().unwrap_or("");
        if nom_societe.trim().is_empty() {
            return Err(ErreurValidation::NomSocieteManquant);
        }

        let siret = demande.company.siret.as_deref().unwrap_or("").trim();
        if siret.len() < SIRET_LONGUEUR_MIN || siret.len() > SIRET_LONGUEUR_MAX {
            return Err(ErreurValidation::SiretInvalide);
        }
    }

    Ok(())
}
