use super::memory::{NewArticle, NewReview, Store};
use super::users::{NewUser, UserStore};

pub(super) fn load(store: &mut Store) {
    let articles = [
        (
            "Laptop Dell XPS 13",
            "Ordinateur portable haute performance",
            1200.0,
            15,
            "Électronique",
        ),
        (
            "Casque Sony WH-1000XM4",
            "Casque sans fil avec réduction de bruit",
            350.0,
            25,
            "Audio",
        ),
        (
            "Clavier Mécanique Corsair",
            "Clavier RGB haute performance",
            150.0,
            30,
            "Accessoires",
        ),
    ];
    for (titre, description, prix, stock, categorie) in articles {
        store.create_article(NewArticle {
            titre: titre.to_string(),
            description: description.to_string(),
            prix,
            stock,
            categorie: categorie.to_string(),
        });
    }

    let reviews = [
        (1, "Ahmed", 5, "Excellent produit, vraiment recommandé!"),
        (1, "Fatima", 4, "Bon produit mais un peu cher"),
        (2, "Hassan", 5, "Qualité du son incroyable!"),
    ];
    for (article_id, utilisateur, note, commentaire) in reviews {
        store.create_review(NewReview {
            article_id,
            utilisateur: utilisateur.to_string(),
            note,
            commentaire: commentaire.to_string(),
        });
    }
}

pub(super) fn load_users(users: &mut UserStore) {
    for (nom, email) in [
        ("Othman", "othman@example.com"),
        ("Ahmed", "ahmed@example.com"),
    ] {
        users.create(NewUser {
            nom: nom.to_string(),
            email: email.to_string(),
        });
    }
}
