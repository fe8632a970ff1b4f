//! Stockage local
//!
//! Enveloppe légère de `web_sys::Storage`, plus les accès à la paire de
//! session persistée. Les deux clés de session sont toujours écrites
//! ensemble et effacées ensemble.

use payetonkawa_shared::{CLE_JETON, CLE_UTILISATEUR};

/// Accès au LocalStorage du navigateur.
pub struct LocalStorage;

impl LocalStorage {
    fn stockage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// Valeur stockée sous `cle`, ou `None` si absente ou inaccessible.
    pub fn get(cle: &str) -> Option<String> {
        Self::stockage()?.get_item(cle).ok()?
    }

    /// Écrit `valeur` sous `cle`. Rend `false` si l'écriture échoue.
    pub fn set(cle: &str, valeur: &str) -> bool {
        Self::stockage()
            .and_then(|s| s.set_item(cle, valeur).ok())
            .is_some()
    }

    /// Supprime `cle`. Rend `false` si la suppression échoue.
    pub fn delete(cle: &str) -> bool {
        Self::stockage()
            .and_then(|s| s.remove_item(cle).ok())
            .is_some()
    }
}

/// Lit la paire de session persistée (jeton, utilisateur JSON).
///
/// Rend `None` dès que l'une des deux entrées manque : une paire
/// incomplète ne constitue pas une session.
pub fn lire_session() -> Option<(String, String)> {
    let jeton = LocalStorage::get(CLE_JETON)?;
    let utilisateur = LocalStorage::get(CLE_UTILISATEUR)?;
    Some((jeton, utilisateur))
}

/// Persiste la paire de session.
pub fn ecrire_session(jeton: &str, utilisateur_json: &str) {
    LocalStorage::set(CLE_JETON, jeton);
    LocalStorage::set(CLE_UTILISATEUR, utilisateur_json);
}

/// Efface la paire de session.
pub fn effacer_session() {
    LocalStorage::delete(CLE_JETON);
    LocalStorage::delete(CLE_UTILISATEUR);
}
