//! Profil du client connecté
//!
//! Vue en lecture avec bascule en édition. L'enregistrement passe par le
//! service clients, puis la session persistée est alignée sur le profil
//! enregistré. Annuler restaure les dernières valeurs persistées.

use leptos::prelude::*;
use leptos::task::spawn_local;
use payetonkawa_shared::{TypeCompte, Utilisateur};
use serde::Serialize;

use crate::api::use_api;
use crate::components::icons::{
    Courriel, Crayon, Croix, Disquette, Immeuble, Lieu, Telephone, Utilisateur as IconeUtilisateur,
};
use crate::services::clients;
use crate::session::use_session;

/// Champs modifiables du profil, envoyés en mise à jour partielle.
#[derive(Debug, Clone, Serialize)]
struct MiseAJourProfil {
    nom: String,
    email: String,
    telephone: String,
    adresse: String,
}

#[component]
pub fn PageProfil() -> impl IntoView {
    let session = use_session();
    let api = StoredValue::new(use_api());

    let (edition, fixer_edition) = signal(false);
    let (enregistrement, fixer_enregistrement) = signal(false);
    let (erreur, fixer_erreur) = signal(Option::<String>::None);

    let nom = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let telephone = RwSignal::new(String::new());
    let adresse = RwSignal::new(String::new());

    // Recopie les valeurs persistées dans le formulaire.
    let remplir = move || {
        if let Some(utilisateur) = session.etat.get_untracked().utilisateur {
            nom.set(utilisateur.nom);
            email.set(utilisateur.email);
            telephone.set(utilisateur.telephone.unwrap_or_default());
            adresse.set(utilisateur.adresse.unwrap_or_default());
        }
    };

    // Le formulaire se remplit dès qu'un utilisateur est disponible ; le
    // memo évite qu'un autre mouvement de la session (modale) n'écrase une
    // édition en cours.
    let utilisateur_courant = Memo::new(move |_| session.etat.with(|etat| etat.utilisateur.clone()));
    Effect::new(move |_| {
        let _ = utilisateur_courant.get();
        remplir();
    });

    let enregistrer = move |_| {
        let Some(utilisateur) = session.etat.get_untracked().utilisateur else {
            return;
        };
        let api = api.get_value();
        let corps = MiseAJourProfil {
            nom: nom.get_untracked(),
            email: email.get_untracked(),
            telephone: telephone.get_untracked(),
            adresse: adresse.get_untracked(),
        };
        fixer_enregistrement.set(true);
        fixer_erreur.set(None);
        spawn_local(async move {
            match clients::modifier(&api, &utilisateur.id, &corps).await {
                Ok(_) => {
                    let mis_a_jour = Utilisateur {
                        id: utilisateur.id,
                        nom: corps.nom,
                        email: corps.email,
                        telephone: (!corps.telephone.is_empty()).then_some(corps.telephone),
                        adresse: (!corps.adresse.is_empty()).then_some(corps.adresse),
                        type_compte: utilisateur.type_compte,
                    };
                    session.mettre_a_jour_utilisateur(mis_a_jour);
                    fixer_edition.set(false);
                }
                Err(erreur) => {
                    fixer_erreur.set(Some(format!("Erreur lors de la mise à jour : {erreur}")))
                }
            }
            fixer_enregistrement.set(false);
        });
    };

    let annuler = move |_| {
        remplir();
        fixer_erreur.set(None);
        fixer_edition.set(false);
    };

    let connecte = move || session.etat.get().utilisateur.is_some();
    let type_compte = move || {
        session
            .etat
            .get()
            .utilisateur
            .map(|utilisateur| utilisateur.type_compte)
    };

    view! {
        <Show
            when=connecte
            fallback=|| {
                view! {
                    <div class="text-center py-12">
                        <IconeUtilisateur attr:class="h-16 w-16 opacity-30 mx-auto mb-4" />
                        <h3 class="text-lg font-medium mb-2">"Connexion requise"</h3>
                        <p class="text-base-content/70">
                            "Vous devez être connecté pour voir votre profil"
                        </p>
                    </div>
                }
            }
        >
            <div class="space-y-6 max-w-3xl">
                <div>
                    <h1 class="text-3xl font-bold">"Mon Profil"</h1>
                    <p class="text-base-content/70 mt-2">
                        "Gérez vos informations personnelles"
                    </p>
                </div>

                <Show when=move || erreur.get().is_some()>
                    <div role="alert" class="alert alert-error">
                        <span>{move || erreur.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <div class="flex items-center justify-between mb-4">
                            <h2 class="card-title">"Informations personnelles"</h2>
                            <Show
                                when=move || edition.get()
                                fallback=move || {
                                    view! {
                                        <button
                                            class="btn btn-ghost btn-sm gap-2 text-primary"
                                            on:click=move |_| fixer_edition.set(true)
                                        >
                                            <Crayon attr:class="h-4 w-4" />
                                            "Modifier"
                                        </button>
                                    }
                                }
                            >
                                <div class="flex gap-2">
                                    <button
                                        class="btn btn-success btn-sm gap-2"
                                        disabled=move || enregistrement.get()
                                        on:click=enregistrer
                                    >
                                        <Disquette attr:class="h-4 w-4" />
                                        "Sauvegarder"
                                    </button>
                                    <button class="btn btn-ghost btn-sm gap-2" on:click=annuler>
                                        <Croix attr:class="h-4 w-4" />
                                        "Annuler"
                                    </button>
                                </div>
                            </Show>
                        </div>

                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"Nom complet"</span>
                                </label>
                                <Show
                                    when=move || edition.get()
                                    fallback=move || {
                                        view! {
                                            <div class="flex items-center gap-2">
                                                <IconeUtilisateur attr:class="h-4 w-4 opacity-50" />
                                                <span>{nom}</span>
                                            </div>
                                        }
                                    }
                                >
                                    <input
                                        type="text"
                                        class="input input-bordered"
                                        on:input=move |ev| nom.set(event_target_value(&ev))
                                        prop:value=nom
                                    />
                                </Show>
                            </div>

                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"Email"</span>
                                </label>
                                <Show
                                    when=move || edition.get()
                                    fallback=move || {
                                        view! {
                                            <div class="flex items-center gap-2">
                                                <Courriel attr:class="h-4 w-4 opacity-50" />
                                                <span>{email}</span>
                                            </div>
                                        }
                                    }
                                >
                                    <input
                                        type="email"
                                        class="input input-bordered"
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                        prop:value=email
                                    />
                                </Show>
                            </div>

                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"Téléphone"</span>
                                </label>
                                <Show
                                    when=move || edition.get()
                                    fallback=move || {
                                        view! {
                                            <div class="flex items-center gap-2">
                                                <Telephone attr:class="h-4 w-4 opacity-50" />
                                                <span>
                                                    {move || {
                                                        let valeur = telephone.get();
                                                        if valeur.is_empty() {
                                                            "Non renseigné".to_string()
                                                        } else {
                                                            valeur
                                                        }
                                                    }}
                                                </span>
                                            </div>
                                        }
                                    }
                                >
                                    <input
                                        type="tel"
                                        class="input input-bordered"
                                        on:input=move |ev| telephone.set(event_target_value(&ev))
                                        prop:value=telephone
                                    />
                                </Show>
                            </div>

                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"Type de compte"</span>
                                </label>
                                <div class="flex items-center gap-2">
                                    {move || {
                                        match type_compte() {
                                            Some(TypeCompte::Professionnel) => {
                                                view! {
                                                    <Immeuble attr:class="h-4 w-4 opacity-50" />
                                                    <span class="badge badge-info">"Professionnel"</span>
                                                }
                                                    .into_any()
                                            }
                                            _ => {
                                                view! {
                                                    <IconeUtilisateur attr:class="h-4 w-4 opacity-50" />
                                                    <span class="badge">"Particulier"</span>
                                                }
                                                    .into_any()
                                            }
                                        }
                                    }}
                                </div>
                            </div>
                        </div>

                        <div class="form-control mt-4">
                            <label class="label">
                                <span class="label-text">"Adresse"</span>
                            </label>
                            <Show
                                when=move || edition.get()
                                fallback=move || {
                                    view! {
                                        <div class="flex items-start gap-2">
                                            <Lieu attr:class="h-4 w-4 opacity-50 mt-1" />
                                            <span>
                                                {move || {
                                                    let valeur = adresse.get();
                                                    if valeur.is_empty() {
                                                        "Non renseignée".to_string()
                                                    } else {
                                                        valeur
                                                    }
                                                }}
                                            </span>
                                        </div>
                                    }
                                }
                            >
                                <textarea
                                    class="textarea textarea-bordered"
                                    rows="3"
                                    on:input=move |ev| adresse.set(event_target_value(&ev))
                                    prop:value=adresse
                                ></textarea>
                            </Show>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
