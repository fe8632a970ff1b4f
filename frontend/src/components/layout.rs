//! Coquille unique de l'application
//!
//! Un seul en-tête de navigation pour la vitrine et la zone
//! d'administration ; la modale de connexion est montée ici, au-dessus de
//! toutes les pages.

use leptos::prelude::*;

use crate::components::icons::{Cafe, Deconnexion, Panier};
use crate::components::login_modal::ModaleConnexion;
use crate::session::use_session;
use crate::web::router::Lien;

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200">
            <EnTete />
            <main class="max-w-7xl mx-auto p-4 md:p-8">{children()}</main>
            <ModaleConnexion />
        </div>
    }
}

#[component]
fn EnTete() -> impl IntoView {
    let session = use_session();

    let connecte = move || session.etat.get().utilisateur.is_some();
    let nom = move || {
        session
            .etat
            .get()
            .utilisateur
            .map(|utilisateur| utilisateur.nom)
            .unwrap_or_default()
    };

    let ouvrir_connexion = move |_| session.ouvrir_modale();
    let se_deconnecter = move |_| session.deconnexion();

    view! {
        <header class="navbar bg-base-100 shadow-md px-4">
            <div class="flex-1 gap-2">
                <Lien vers="/">
                    <span class="btn btn-ghost text-xl gap-2">
                        <Cafe attr:class="h-6 w-6 text-primary" />
                        "PayeTonKawa"
                    </span>
                </Lien>
                <nav class="hidden md:flex items-center gap-1">
                    <Lien vers="/boutique">
                        <span class="btn btn-ghost btn-sm">"Boutique"</span>
                    </Lien>
                    <Lien vers="/produits">
                        <span class="btn btn-ghost btn-sm">"Produits"</span>
                    </Lien>
                    <Show when=connecte>
                        <Lien vers="/mes-commandes">
                            <span class="btn btn-ghost btn-sm">"Mes commandes"</span>
                        </Lien>
                        <Lien vers="/profil">
                            <span class="btn btn-ghost btn-sm">"Profil"</span>
                        </Lien>
                        <div class="divider divider-horizontal mx-0"></div>
                        <Lien vers="/dashboard">
                            <span class="btn btn-ghost btn-sm">"Dashboard"</span>
                        </Lien>
                        <Lien vers="/clients">
                            <span class="btn btn-ghost btn-sm">"Clients"</span>
                        </Lien>
                        <Lien vers="/commandes">
                            <span class="btn btn-ghost btn-sm">"Commandes"</span>
                        </Lien>
                    </Show>
                </nav>
            </div>
            <div class="flex-none gap-2">
                <button class="btn btn-ghost btn-circle" aria-label="Panier">
                    <Panier attr:class="h-5 w-5" />
                </button>
                <Show
                    when=connecte
                    fallback=move || {
                        view! {
                            <button class="btn btn-primary btn-sm" on:click=ouvrir_connexion>
                                "Se connecter"
                            </button>
                        }
                    }
                >
                    <span class="badge badge-neutral hidden md:inline-flex">{nom}</span>
                    <button class="btn btn-outline btn-error btn-sm gap-2" on:click=se_deconnecter>
                        <Deconnexion attr:class="h-4 w-4" />
                        "Se déconnecter"
                    </button>
                </Show>
            </div>
        </header>
    }
}
