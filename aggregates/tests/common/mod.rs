// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

#![allow(dead_code)]

//! People who own pets, shared by the integration tests.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PetType {
    Cat,
    Dog,
    Hamster,
    Turtle,
    Bird,
    Snake,
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PetType::Cat => "CAT",
            PetType::Dog => "DOG",
            PetType::Hamster => "HAMSTER",
            PetType::Turtle => "TURTLE",
            PetType::Bird => "BIRD",
            PetType::Snake => "SNAKE",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pet {
    kind: PetType,
    name: String,
    age: i32,
}

impl Pet {
    pub fn new(kind: PetType, name: &str, age: i32) -> Self {
        Self {
            kind,
            name: name.to_string(),
            age,
        }
    }

    pub fn kind(&self) -> PetType {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    first_name: String,
    last_name: String,
    pets: Vec<Pet>,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            pets: vec![],
        }
    }

    pub fn with_pet(mut self, kind: PetType, name: &str, age: i32) -> Self {
        self.pets.push(Pet::new(kind, name, age));
        self
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn named(&self, name: &str) -> bool {
        self.full_name() == name
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    /// One entry per pet, so a person with two hamsters yields `Hamster` twice.
    pub fn pet_types(&self) -> Vec<PetType> {
        self.pets.iter().map(Pet::kind).collect()
    }
}

pub fn people() -> Vec<Person> {
    vec![
        Person::new("Mary", "Smith").with_pet(PetType::Cat, "Tabby", 2),
        Person::new("Bob", "Smith")
            .with_pet(PetType::Cat, "Dolly", 3)
            .with_pet(PetType::Dog, "Spot", 2),
        Person::new("Ted", "Smith").with_pet(PetType::Dog, "Spot", 4),
        Person::new("Jake", "Snake").with_pet(PetType::Snake, "Serpy", 1),
        Person::new("Barry", "Bird").with_pet(PetType::Bird, "Tweety", 2),
        Person::new("Terry", "Turtle").with_pet(PetType::Turtle, "Speedy", 1),
        Person::new("Harry", "Hamster")
            .with_pet(PetType::Hamster, "Fuzzy", 1)
            .with_pet(PetType::Hamster, "Wuzzy", 1),
        Person::new("John", "Doe"),
    ]
}

pub fn pets(people: &[Person]) -> impl Iterator<Item = &Pet> {
    people.iter().flat_map(Person::pets)
}
