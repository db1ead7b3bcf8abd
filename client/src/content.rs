//! Static storefront copy: hero slides and featured products.

/// One hero carousel panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideContent {
    pub src: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub price: &'static str,
    pub image: &'static str,
    pub blurb: &'static str,
}

pub const SLIDES: &[SlideContent] = &[
    SlideContent {
        src: "/img/slide-bolsos.jpg",
        alt: "Colección de bolsos de cuero",
        title: "Nueva colección",
        caption: "Bolsos hechos a mano para todos los días.",
    },
    SlideContent {
        src: "/img/slide-joyas.jpg",
        alt: "Aretes y collares dorados",
        title: "Joyería",
        caption: "Piezas ligeras que combinan con todo.",
    },
    SlideContent {
        src: "/img/slide-gafas.jpg",
        alt: "Gafas de sol sobre arena",
        title: "Verano",
        caption: "Gafas de sol con protección UV400.",
    },
];

pub const PRODUCTS: &[Product] = &[
    Product {
        name: "Bolso Tote",
        price: "$45.00",
        image: "/img/producto-tote.jpg",
        blurb: "Cuero sintético, forro interior y cierre magnético.",
    },
    Product {
        name: "Aretes Luna",
        price: "$18.00",
        image: "/img/producto-aretes.jpg",
        blurb: "Baño de oro, hipoalergénicos.",
    },
    Product {
        name: "Gafas Retro",
        price: "$29.00",
        image: "/img/producto-gafas.jpg",
        blurb: "Montura de acetato con lentes polarizados.",
    },
    Product {
        name: "Pulsera Trenzada",
        price: "$12.00",
        image: "/img/producto-pulsera.jpg",
        blurb: "Hilo encerado y cierre ajustable.",
    },
];
