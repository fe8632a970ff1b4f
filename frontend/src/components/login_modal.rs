//! Modale de connexion / inscription
//!
//! Montée une seule fois dans la coquille, pilotée par l'indicateur de
//! visibilité du magasin de session. Les refus de validation s'affichent
//! en ligne avant tout appel réseau ; les échecs d'appel restent des
//! messages génériques.

mod form_state;

use leptos::prelude::*;
use leptos::task::spawn_local;
use payetonkawa_shared::TypeCompte;

use crate::api::use_api;
use crate::components::icons::{Cafe, Croix};
use crate::session::{self, use_session};

use form_state::FormulaireInscription;

#[component]
pub fn ModaleConnexion() -> impl IntoView {
    let session = use_session();
    let api = StoredValue::new(use_api());

    let (mode_inscription, fixer_mode) = signal(false);
    let (en_cours, fixer_en_cours) = signal(false);
    let (erreur, fixer_erreur) = signal(Option::<String>::None);

    // Champs de connexion.
    let (email, fixer_email) = signal(String::new());
    let (mot_de_passe, fixer_mot_de_passe) = signal(String::new());

    let formulaire = FormulaireInscription::new();

    let dialogue_ref = NodeRef::<leptos::html::Dialog>::new();
    let ouverte = move || session.etat.get().modale_connexion;

    // Synchronise l'élément <dialog> natif avec l'état de la session.
    Effect::new(move |_| {
        if let Some(dialogue) = dialogue_ref.get() {
            if ouverte() {
                if !dialogue.open() {
                    let _ = dialogue.show_modal();
                }
            } else if dialogue.open() {
                dialogue.close();
            }
        }
    });

    let fermer = move |_| {
        fixer_erreur.set(None);
        session.fermer_modale();
    };

    let basculer_mode = move |_| {
        fixer_erreur.set(None);
        fixer_mode.update(|mode| *mode = !*mode);
    };

    let soumettre_connexion = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        fixer_en_cours.set(true);
        fixer_erreur.set(None);

        let api = api.get_value();
        spawn_local(async move {
            let resultat = session::connexion(
                &session,
                &api,
                &email.get_untracked(),
                &mot_de_passe.get_untracked(),
            )
            .await;
            match resultat {
                Ok(()) => {
                    fixer_email.set(String::new());
                    fixer_mot_de_passe.set(String::new());
                }
                Err(_) => fixer_erreur.set(Some("Erreur de connexion".to_string())),
            }
            fixer_en_cours.set(false);
        });
    };

    let soumettre_inscription = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        fixer_en_cours.set(true);
        fixer_erreur.set(None);

        let api = api.get_value();
        let demande = formulaire.en_demande();
        let confirmation = formulaire.confirmation.get_untracked();
        spawn_local(async move {
            match session::inscription(&session, &api, &demande, &confirmation).await {
                Ok(()) => formulaire.reinitialiser(),
                Err(erreur) => fixer_erreur.set(Some(erreur.to_string())),
            }
            fixer_en_cours.set(false);
        });
    };

    let professionnel = move || formulaire.type_compte.get() == TypeCompte::Professionnel;

    view! {
        <dialog node_ref=dialogue_ref class="modal">
            <div class="modal-box max-w-md">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-bold flex items-center gap-2">
                        <Cafe attr:class="h-6 w-6 text-primary" />
                        {move || if mode_inscription.get() { "Inscription" } else { "Connexion" }}
                    </h2>
                    <button class="btn btn-ghost btn-sm btn-circle" on:click=fermer>
                        <Croix attr:class="h-5 w-5" />
                    </button>
                </div>

                <Show when=move || erreur.get().is_some()>
                    <div role="alert" class="alert alert-error text-sm py-2 mb-4">
                        <span>{move || erreur.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <Show
                    when=move || !mode_inscription.get()
                    fallback=move || {
                        view! {
                            <form class="space-y-3" on:submit=soumettre_inscription>
                                <div class="grid grid-cols-2 gap-3">
                                    <input
                                        type="text"
                                        placeholder="Nom"
                                        class="input input-bordered w-full"
                                        on:input=move |ev| formulaire.nom.set(event_target_value(&ev))
                                        prop:value=formulaire.nom
                                        required
                                    />
                                    <input
                                        type="text"
                                        placeholder="Prénom"
                                        class="input input-bordered w-full"
                                        on:input=move |ev| formulaire.prenom.set(event_target_value(&ev))
                                        prop:value=formulaire.prenom
                                        required
                                    />
                                </div>
                                <input
                                    type="email"
                                    placeholder="Email"
                                    class="input input-bordered w-full"
                                    on:input=move |ev| formulaire.email.set(event_target_value(&ev))
                                    prop:value=formulaire.email
                                    required
                                />
                                <input
                                    type="tel"
                                    placeholder="Téléphone"
                                    class="input input-bordered w-full"
                                    on:input=move |ev| formulaire.telephone.set(event_target_value(&ev))
                                    prop:value=formulaire.telephone
                                />
                                <input
                                    type="text"
                                    placeholder="Adresse"
                                    class="input input-bordered w-full"
                                    on:input=move |ev| formulaire.ligne1.set(event_target_value(&ev))
                                    prop:value=formulaire.ligne1
                                />
                                <input
                                    type="text"
                                    placeholder="Complément d'adresse"
                                    class="input input-bordered w-full"
                                    on:input=move |ev| formulaire.ligne2.set(event_target_value(&ev))
                                    prop:value=formulaire.ligne2
                                />
                                <div class="grid grid-cols-2 gap-3">
                                    <input
                                        type="text"
                                        placeholder="Code postal"
                                        class="input input-bordered w-full"
                                        on:input=move |ev| {
                                            formulaire.code_postal.set(event_target_value(&ev))
                                        }
                                        prop:value=formulaire.code_postal
                                    />
                                    <input
                                        type="text"
                                        placeholder="Ville"
                                        class="input input-bordered w-full"
                                        on:input=move |ev| formulaire.ville.set(event_target_value(&ev))
                                        prop:value=formulaire.ville
                                    />
                                </div>
                                <select
                                    class="select select-bordered w-full"
                                    on:change=move |ev| {
                                        let choix = if event_target_value(&ev) == "professionnel" {
                                            TypeCompte::Professionnel
                                        } else {
                                            TypeCompte::Particulier
                                        };
                                        formulaire.type_compte.set(choix);
                                    }
                                >
                                    <option value="particulier">"Particulier"</option>
                                    <option value="professionnel">"Professionnel"</option>
                                </select>
                                <Show when=professionnel>
                                    <input
                                        type="text"
                                        placeholder="Nom de la société"
                                        class="input input-bordered w-full"
                                        on:input=move |ev| {
                                            formulaire.nom_societe.set(event_target_value(&ev))
                                        }
                                        prop:value=formulaire.nom_societe
                                    />
                                    <input
                                        type="text"
                                        placeholder="SIRET"
                                        class="input input-bordered w-full mt-3"
                                        on:input=move |ev| formulaire.siret.set(event_target_value(&ev))
                                        prop:value=formulaire.siret
                                    />
                                </Show>
                                <input
                                    type="password"
                                    placeholder="Mot de passe"
                                    class="input input-bordered w-full"
                                    on:input=move |ev| {
                                        formulaire.mot_de_passe.set(event_target_value(&ev))
                                    }
                                    prop:value=formulaire.mot_de_passe
                                    required
                                />
                                <input
                                    type="password"
                                    placeholder="Confirmer le mot de passe"
                                    class="input input-bordered w-full"
                                    on:input=move |ev| {
                                        formulaire.confirmation.set(event_target_value(&ev))
                                    }
                                    prop:value=formulaire.confirmation
                                    required
                                />
                                <button class="btn btn-primary w-full" disabled=move || en_cours.get()>
                                    {move || {
                                        if en_cours.get() {
                                            view! {
                                                <span class="loading loading-spinner"></span>
                                                "Inscription..."
                                            }
                                                .into_any()
                                        } else {
                                            "S'inscrire".into_any()
                                        }
                                    }}
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="space-y-3" on:submit=soumettre_connexion>
                        <div class="form-control">
                            <label class="label" for="email-connexion">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email-connexion"
                                type="email"
                                placeholder="vous@exemple.fr"
                                class="input input-bordered w-full"
                                on:input=move |ev| fixer_email.set(event_target_value(&ev))
                                prop:value=email
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="mot-de-passe-connexion">
                                <span class="label-text">"Mot de passe"</span>
                            </label>
                            <input
                                id="mot-de-passe-connexion"
                                type="password"
                                placeholder="••••••••"
                                class="input input-bordered w-full"
                                on:input=move |ev| fixer_mot_de_passe.set(event_target_value(&ev))
                                prop:value=mot_de_passe
                                required
                            />
                        </div>
                        <button class="btn btn-primary w-full" disabled=move || en_cours.get()>
                            {move || {
                                if en_cours.get() {
                                    view! {
                                        <span class="loading loading-spinner"></span>
                                        "Connexion..."
                                    }
                                        .into_any()
                                } else {
                                    "Se connecter".into_any()
                                }
                            }}
                        </button>
                    </form>
                </Show>

                <div class="text-center mt-4 text-sm">
                    <a class="link link-primary" on:click=basculer_mode>
                        {move || {
                            if mode_inscription.get() {
                                "Déjà client ? Se connecter"
                            } else {
                                "Pas encore de compte ? S'inscrire"
                            }
                        }}
                    </a>
                </div>
            </div>
        </dialog>
    }
}
