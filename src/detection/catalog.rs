//! Technology catalog
//!
//! Plain data: adding a technology means adding an entry here, the matching
//! logic in [`super::rules`] never changes. Identifiers are lower-kebab slugs
//! shared with the extension table.

use super::rules::TechnologyRule;

macro_rules! rule {
    ($id:literal $(, files: [$($file:literal),* $(,)?])? $(, packages: [$($pkg:literal),* $(,)?])? $(, extensions: [$($ext:literal),* $(,)?])? $(,)?) => {
        TechnologyRule {
            id: $id,
            $(file_patterns: &[$($file),*],)?
            $(package_names: &[$($pkg),*],)?
            $(extensions: &[$($ext),*],)?
            ..TechnologyRule::EMPTY
        }
    };
}

pub static TECHNOLOGY_RULES: &[TechnologyRule] = &[
    // Languages
    rule!("javascript", files: ["package.json", ".eslintrc.js", "jsconfig.json"], extensions: [".js", ".mjs", ".cjs", ".jsx"]),
    rule!("typescript", files: ["tsconfig.json", "tsconfig.*.json"], packages: ["typescript", "ts-node", "tsx"], extensions: [".ts", ".tsx", ".mts", ".cts"]),
    rule!("python", files: ["requirements.txt", "setup.py", "setup.cfg", "pyproject.toml", "Pipfile", "tox.ini", ".python-version"], extensions: [".py"]),
    rule!("ruby", files: ["Gemfile", "Rakefile", ".ruby-version", "*.gemspec"], extensions: [".rb"]),
    rule!("php", files: ["composer.json", "composer.lock", "artisan"], extensions: [".php"]),
    rule!("java", files: ["pom.xml", ".java-version"], extensions: [".java"]),
    rule!("kotlin", files: ["build.gradle.kts", "settings.gradle.kts"], extensions: [".kt", ".kts"]),
    rule!("scala", files: ["build.sbt", ".scalafmt.conf"], extensions: [".scala", ".sc"]),
    rule!("groovy", extensions: [".groovy"]),
    rule!("clojure", files: ["project.clj", "deps.edn", "bb.edn"], extensions: [".clj", ".cljc"]),
    rule!("clojurescript", files: ["shadow-cljs.edn"], extensions: [".cljs"]),
    rule!("go", files: ["go.mod", "go.sum", "go.work"], extensions: [".go"]),
    rule!("rust", files: ["Cargo.toml", "Cargo.lock", "rust-toolchain", "rust-toolchain.toml"], extensions: [".rs"]),
    rule!("c", extensions: [".c", ".h"]),
    rule!("cpp", files: ["conanfile.txt", "conanfile.py", "vcpkg.json"], extensions: [".cpp", ".cc", ".cxx", ".hpp", ".hh"]),
    rule!("csharp", files: ["*.csproj", "*.sln", "global.json", "Directory.Build.props"], extensions: [".cs"]),
    rule!("fsharp", files: ["*.fsproj"], extensions: [".fs", ".fsx"]),
    rule!("visual-basic", files: ["*.vbproj"], extensions: [".vb"]),
    rule!("swift", files: ["Package.swift", "*.xcodeproj/"], extensions: [".swift"]),
    rule!("objective-c", files: ["Podfile"], extensions: [".m", ".mm"]),
    rule!("dart", files: ["pubspec.yaml", "analysis_options.yaml"], extensions: [".dart"]),
    rule!("elixir", files: ["mix.exs", "mix.lock", ".formatter.exs"], extensions: [".ex", ".exs"]),
    rule!("erlang", files: ["rebar.config", "rebar.lock", "erlang.mk"], extensions: [".erl", ".hrl"]),
    rule!("gleam", files: ["gleam.toml"], extensions: [".gleam"]),
    rule!("haskell", files: ["stack.yaml", "cabal.project", "*.cabal", "package.yaml"], extensions: [".hs", ".lhs"]),
    rule!("ocaml", files: ["dune-project", "dune", "*.opam"], extensions: [".ml", ".mli"]),
    rule!("elm", files: ["elm.json"], extensions: [".elm"]),
    rule!("purescript", files: ["spago.dhall", "spago.yaml"], extensions: [".purs"]),
    rule!("rescript", files: ["bsconfig.json", "rescript.json"], packages: ["rescript"], extensions: [".res"]),
    rule!("lua", files: ["*.rockspec", ".luarc.json"], extensions: [".lua"]),
    rule!("r", files: ["DESCRIPTION", ".Rprofile", "renv.lock"], extensions: [".r", ".rmd"]),
    rule!("julia", files: ["Project.toml", "Manifest.toml"], extensions: [".jl"]),
    rule!("perl", files: ["cpanfile", "Makefile.PL", "dist.ini"], extensions: [".pl", ".pm"]),
    rule!("shell", extensions: [".sh", ".bash", ".zsh"]),
    rule!("powershell", extensions: [".ps1", ".psm1", ".psd1"]),
    rule!("zig", files: ["build.zig", "build.zig.zon"], extensions: [".zig"]),
    rule!("nim", files: ["*.nimble"], extensions: [".nim"]),
    rule!("crystal", files: ["shard.yml"], extensions: [".cr"]),
    rule!("d", files: ["dub.json", "dub.sdl"]),
    rule!("fortran", files: ["fpm.toml"], extensions: [".f90", ".f95"]),
    rule!("solidity", files: ["foundry.toml", "truffle-config.js", "remappings.txt"], extensions: [".sol"]),
    rule!("vyper", extensions: [".vy"]),
    rule!("move", files: ["Move.toml"], extensions: [".move"]),
    rule!("cairo", files: ["Scarb.toml"], extensions: [".cairo"]),
    rule!("mojo", extensions: [".mojo"]),
    rule!("cuda", extensions: [".cu", ".cuh"]),
    rule!("webassembly", packages: ["wasm-pack", "@assemblyscript/loader", "assemblyscript"], extensions: [".wat", ".wasm"]),
    rule!("assembly", extensions: [".asm", ".s"]),
    rule!("sql", extensions: [".sql"]),
    rule!("html", extensions: [".html", ".htm"]),
    rule!("css", extensions: [".css"]),
    rule!("sass", packages: ["sass", "node-sass", "sass-loader"], extensions: [".scss", ".sass"]),
    rule!("less", packages: ["less", "less-loader"], extensions: [".less"]),
    rule!("stylus", packages: ["stylus"], extensions: [".styl"]),
    rule!("coffeescript", packages: ["coffeescript", "coffee-script"], extensions: [".coffee"]),
    rule!("apex", files: ["sfdx-project.json"], extensions: [".cls", ".trigger"]),

    // Frontend frameworks and libraries
    rule!("react", packages: ["react", "react-dom"], extensions: [".jsx", ".tsx"]),
    rule!("preact", packages: ["preact"]),
    rule!("vue", files: ["vue.config.js"], packages: ["vue"], extensions: [".vue"]),
    rule!("angular", files: ["angular.json", ".angular-cli.json"], packages: ["@angular/core"]),
    rule!("angularjs", packages: ["angular"]),
    rule!("svelte", files: ["svelte.config.js", "svelte.config.mjs"], packages: ["svelte"], extensions: [".svelte"]),
    rule!("solidjs", packages: ["solid-js"]),
    rule!("qwik", packages: ["@builder.io/qwik"]),
    rule!("lit", packages: ["lit", "lit-element"]),
    rule!("alpinejs", packages: ["alpinejs"]),
    rule!("htmx", packages: ["htmx.org"]),
    rule!("jquery", packages: ["jquery"]),
    rule!("backbone", packages: ["backbone"]),
    rule!("ember", files: ["ember-cli-build.js", ".ember-cli"], packages: ["ember-source", "ember-cli"]),
    rule!("stimulus", packages: ["@hotwired/stimulus", "stimulus"]),
    rule!("hotwire", packages: ["@hotwired/turbo", "@hotwired/turbo-rails"]),
    rule!("mithril", packages: ["mithril"]),
    rule!("stencil", files: ["stencil.config.ts"], packages: ["@stencil/core"]),
    rule!("web-components", packages: ["@webcomponents/webcomponentsjs"]),

    // Meta frameworks and site generators
    rule!("nextjs", files: ["next.config.js", "next.config.mjs", "next.config.ts"], packages: ["next"]),
    rule!("nuxt", files: ["nuxt.config.js", "nuxt.config.ts"], packages: ["nuxt", "nuxt3"]),
    rule!("remix", files: ["remix.config.js"], packages: ["@remix-run/react", "@remix-run/node"]),
    rule!("gatsby", files: ["gatsby-config.js", "gatsby-config.ts"], packages: ["gatsby"]),
    rule!("sveltekit", packages: ["@sveltejs/kit"]),
    rule!("astro", files: ["astro.config.mjs", "astro.config.ts"], packages: ["astro"], extensions: [".astro"]),
    rule!("solidstart", packages: ["@solidjs/start", "solid-start"]),
    rule!("docusaurus", files: ["docusaurus.config.js", "docusaurus.config.ts"], packages: ["@docusaurus/core"]),
    rule!("vitepress", packages: ["vitepress"]),
    rule!("vuepress", packages: ["vuepress"]),
    rule!("eleventy", files: [".eleventy.js", "eleventy.config.js"], packages: ["@11ty/eleventy"]),
    rule!("hugo", files: ["hugo.toml", "hugo.yaml", "archetypes/"]),
    rule!("jekyll", files: ["_config.yml", "_layouts/", "_posts/"], packages: ["jekyll"]),
    rule!("hexo", packages: ["hexo"]),
    rule!("mkdocs", files: ["mkdocs.yml"], packages: ["mkdocs", "mkdocs-material"]),
    rule!("sphinx", files: ["docs/conf.py"], packages: ["sphinx"]),
    rule!("storybook", files: [".storybook/"], packages: ["@storybook/react", "@storybook/vue3", "storybook"]),
    rule!("redwoodjs", files: ["redwood.toml"], packages: ["@redwoodjs/core"]),
    rule!("blitzjs", packages: ["blitz"]),
    rule!("expo", files: ["app.json", "eas.json"], packages: ["expo"]),
    rule!("react-native", files: ["metro.config.js"], packages: ["react-native"]),
    rule!("ionic", files: ["ionic.config.json"], packages: ["@ionic/core", "@ionic/react", "@ionic/angular"]),
    rule!("capacitor", files: ["capacitor.config.ts", "capacitor.config.json"], packages: ["@capacitor/core"]),
    rule!("cordova", packages: ["cordova", "cordova-android", "cordova-ios"]),
    rule!("electron", packages: ["electron"]),
    rule!("tauri", files: ["src-tauri/", "tauri.conf.json"], packages: ["@tauri-apps/api", "@tauri-apps/cli"]),
    rule!("flutter", files: ["pubspec.lock", "android/app/build.gradle"], extensions: [".dart"]),

    // Styling and UI kits
    rule!("tailwindcss", files: ["tailwind.config.js", "tailwind.config.ts", "tailwind.config.cjs"], packages: ["tailwindcss"]),
    rule!("bootstrap", packages: ["bootstrap", "react-bootstrap"]),
    rule!("bulma", packages: ["bulma"]),
    rule!("material-ui", packages: ["@mui/material", "@material-ui/core"]),
    rule!("chakra-ui", packages: ["@chakra-ui/react"]),
    rule!("ant-design", packages: ["antd"]),
    rule!("mantine", packages: ["@mantine/core"]),
    rule!("shadcn-ui", files: ["components.json"], packages: ["@radix-ui/*"]),
    rule!("styled-components", packages: ["styled-components"]),
    rule!("emotion", packages: ["@emotion/react", "@emotion/styled"]),
    rule!("postcss", files: ["postcss.config.js", "postcss.config.cjs", ".postcssrc"], packages: ["postcss"]),
    rule!("vuetify", packages: ["vuetify"]),
    rule!("quasar", files: ["quasar.config.js"], packages: ["quasar"]),
    rule!("css-modules", extensions: [".module.css", ".module.scss"]),

    // State, data fetching, utilities
    rule!("redux", packages: ["redux", "@reduxjs/toolkit", "react-redux"]),
    rule!("mobx", packages: ["mobx"]),
    rule!("zustand", packages: ["zustand"]),
    rule!("pinia", packages: ["pinia"]),
    rule!("vuex", packages: ["vuex"]),
    rule!("rxjs", packages: ["rxjs"]),
    rule!("react-query", packages: ["@tanstack/react-query", "react-query"]),
    rule!("apollo", packages: ["@apollo/client", "apollo-server", "@apollo/server"]),
    rule!("axios", packages: ["axios"]),
    rule!("lodash", packages: ["lodash", "lodash-es"]),
    rule!("d3", packages: ["d3"]),
    rule!("threejs", packages: ["three"]),
    rule!("chartjs", packages: ["chart.js"]),
    rule!("socketio", packages: ["socket.io", "socket.io-client", "python-socketio"]),
    rule!("zod", packages: ["zod"]),
    rule!("react-router", packages: ["react-router", "react-router-dom"]),
    rule!("framer-motion", packages: ["framer-motion"]),

    // JS build tooling
    rule!("nodejs", files: ["package.json", ".nvmrc", ".node-version"]),
    rule!("deno", files: ["deno.json", "deno.jsonc", "deno.lock"]),
    rule!("bun", files: ["bun.lockb", "bun.lock", "bunfig.toml"]),
    rule!("npm", files: ["package-lock.json", ".npmrc"]),
    rule!("yarn", files: ["yarn.lock", ".yarnrc", ".yarnrc.yml"]),
    rule!("pnpm", files: ["pnpm-lock.yaml", "pnpm-workspace.yaml"]),
    rule!("webpack", files: ["webpack.config.js", "webpack.config.ts"], packages: ["webpack"]),
    rule!("vite", files: ["vite.config.*"], packages: ["vite"]),
    rule!("rollup", files: ["rollup.config.js", "rollup.config.mjs"], packages: ["rollup"]),
    rule!("parcel", files: [".parcelrc"], packages: ["parcel"]),
    rule!("esbuild", packages: ["esbuild"]),
    rule!("swc", files: [".swcrc"], packages: ["@swc/core"]),
    rule!("babel", files: [".babelrc", "babel.config.js", "babel.config.json"], packages: ["@babel/core"]),
    rule!("turborepo", files: ["turbo.json"], packages: ["turbo"]),
    rule!("nx", files: ["nx.json"], packages: ["nx"]),
    rule!("lerna", files: ["lerna.json"], packages: ["lerna"]),
    rule!("gulp", files: ["gulpfile.js"], packages: ["gulp"]),
    rule!("grunt", files: ["Gruntfile.js"], packages: ["grunt"]),
    rule!("eslint", files: [".eslintrc", ".eslintrc.json", ".eslintrc.js", ".eslintrc.cjs", "eslint.config.js", "eslint.config.mjs"], packages: ["eslint"]),
    rule!("prettier", files: [".prettierrc", ".prettierrc.json", "prettier.config.js"], packages: ["prettier"]),
    rule!("biome", files: ["biome.json"], packages: ["@biomejs/biome"]),
    rule!("husky", files: [".husky/"], packages: ["husky"]),

    // Backend: JavaScript
    rule!("express", packages: ["express"]),
    rule!("nestjs", files: ["nest-cli.json"], packages: ["@nestjs/*"]),
    rule!("fastify", packages: ["fastify"]),
    rule!("koa", packages: ["koa"]),
    rule!("hapi", packages: ["@hapi/hapi"]),
    rule!("hono", packages: ["hono"]),
    rule!("adonisjs", files: [".adonisrc.json"], packages: ["@adonisjs/core"]),
    rule!("meteor", files: [".meteor/"], packages: ["meteor-node-stubs"]),
    rule!("sails", files: [".sailsrc"], packages: ["sails"]),
    rule!("strapi", packages: ["@strapi/strapi"]),
    rule!("trpc", packages: ["@trpc/server"]),
    rule!("graphql", packages: ["graphql", "graphene", "strawberry-graphql", "ariadne"], extensions: [".graphql", ".gql"]),

    // Backend: Python
    rule!("django", files: ["manage.py"], packages: ["django", "djangorestframework"]),
    rule!("flask", packages: ["flask"]),
    rule!("fastapi", packages: ["fastapi"]),
    rule!("starlette", packages: ["starlette"]),
    rule!("tornado", packages: ["tornado"]),
    rule!("pyramid", packages: ["pyramid"]),
    rule!("bottle", packages: ["bottle"]),
    rule!("aiohttp", packages: ["aiohttp"]),
    rule!("sanic", packages: ["sanic"]),
    rule!("streamlit", files: [".streamlit/"], packages: ["streamlit"]),
    rule!("gradio", packages: ["gradio"]),
    rule!("dash", packages: ["dash"]),
    rule!("celery", files: ["celeryconfig.py"], packages: ["celery"]),
    rule!("sqlalchemy", packages: ["sqlalchemy", "flask-sqlalchemy"]),
    rule!("pydantic", packages: ["pydantic"]),
    rule!("poetry", files: ["poetry.lock"]),
    rule!("pipenv", files: ["Pipfile", "Pipfile.lock"]),
    rule!("uv", files: ["uv.lock"]),
    rule!("conda", files: ["environment.yml", "environment.yaml", "conda.yaml"]),
    rule!("pytest", files: ["pytest.ini", "conftest.py"], packages: ["pytest"]),
    rule!("jupyter", packages: ["jupyter", "notebook", "jupyterlab"], extensions: [".ipynb"]),
    rule!("numpy", packages: ["numpy"]),
    rule!("pandas", packages: ["pandas"]),
    rule!("scipy", packages: ["scipy"]),
    rule!("matplotlib", packages: ["matplotlib"]),
    rule!("scikit-learn", packages: ["scikit-learn", "sklearn"]),
    rule!("tensorflow", packages: ["tensorflow", "tensorflow-gpu", "@tensorflow/tfjs"]),
    rule!("keras", packages: ["keras"]),
    rule!("pytorch", packages: ["torch", "torchvision", "pytorch-lightning"]),
    rule!("jax", packages: ["jax", "flax"]),
    rule!("huggingface", packages: ["transformers", "datasets", "huggingface-hub", "@huggingface/inference"]),
    rule!("langchain", packages: ["langchain", "langchain-core", "@langchain/core", "langchain-openai"]),
    rule!("llamaindex", packages: ["llama-index", "llamaindex"]),
    rule!("openai", packages: ["openai"]),
    rule!("anthropic-sdk", packages: ["anthropic", "@anthropic-ai/sdk"]),
    rule!("opencv", packages: ["opencv-python", "opencv-contrib-python"]),
    rule!("spacy", packages: ["spacy"]),
    rule!("nltk", packages: ["nltk"]),
    rule!("xgboost", packages: ["xgboost"]),
    rule!("mlflow", files: ["MLproject"], packages: ["mlflow"]),
    rule!("airflow", files: ["dags/"], packages: ["apache-airflow"]),
    rule!("dbt", files: ["dbt_project.yml"], packages: ["dbt-core"]),
    rule!("spark", packages: ["pyspark"]),
    rule!("scrapy", files: ["scrapy.cfg"], packages: ["scrapy"]),
    rule!("beautifulsoup", packages: ["beautifulsoup4", "bs4"]),
    rule!("selenium", packages: ["selenium", "selenium-webdriver"]),
    rule!("requests", packages: ["requests"]),
    rule!("black", packages: ["black"]),
    rule!("ruff", files: ["ruff.toml", ".ruff.toml"], packages: ["ruff"]),
    rule!("mypy", files: ["mypy.ini"], packages: ["mypy"]),
    rule!("gunicorn", files: ["gunicorn.conf.py"], packages: ["gunicorn"]),
    rule!("uvicorn", packages: ["uvicorn"]),

    // Backend: other ecosystems
    rule!("rails", files: ["config/routes.rb", "bin/rails", "config/application.rb"]),
    rule!("sinatra", files: ["config.ru"]),
    rule!("rspec", files: [".rspec", "spec/spec_helper.rb"]),
    rule!("laravel", files: ["artisan", "routes/web.php"], extensions: [".blade.php"]),
    rule!("symfony", files: ["symfony.lock", "config/bundles.php", "bin/console"]),
    rule!("wordpress", files: ["wp-config.php", "wp-content/", "wp-config-sample.php"]),
    rule!("drupal", files: ["core/lib/Drupal.php", "sites/default/"]),
    rule!("codeigniter", files: ["system/CodeIgniter.php", "spark"]),
    rule!("composer", files: ["composer.json"]),
    rule!("phpunit", files: ["phpunit.xml", "phpunit.xml.dist"]),
    rule!("spring-boot", files: ["src/main/resources/application.properties", "src/main/resources/application.yml", "mvnw"]),
    rule!("maven", files: ["pom.xml", ".mvn/"]),
    rule!("gradle", files: ["build.gradle", "build.gradle.kts", "settings.gradle", "gradlew"], extensions: [".gradle"]),
    rule!("android", files: ["AndroidManifest.xml", "app/src/main/AndroidManifest.xml"]),
    rule!("ktor", files: ["src/main/resources/application.conf"]),
    rule!("play-framework", files: ["conf/routes", "conf/application.conf"]),
    rule!("sbt", files: ["build.sbt", "project/build.properties"]),
    rule!("gin", files: ["gin.go"]),
    rule!("aspnet-core", files: ["appsettings.json", "Program.cs", "Startup.cs"], extensions: [".cshtml", ".razor"]),
    rule!("dotnet", files: ["*.csproj", "*.fsproj", "*.sln", "global.json", "nuget.config", "NuGet.Config"]),
    rule!("blazor", extensions: [".razor"]),
    rule!("unity", files: ["ProjectSettings/", "Assets/", "*.unity"], extensions: [".unity", ".prefab"]),
    rule!("unreal-engine", files: ["*.uproject"], extensions: [".uproject", ".uasset"]),
    rule!("godot", files: ["project.godot"], extensions: [".gd", ".tscn"]),
    rule!("phoenix", files: ["lib/*_web.ex", "config/dev.exs"], extensions: [".heex"]),
    rule!("cargo", files: ["Cargo.toml"]),
    rule!("cmake", files: ["CMakeLists.txt", "*.cmake"]),
    rule!("make", files: ["Makefile", "makefile", "GNUmakefile"]),
    rule!("meson", files: ["meson.build"]),
    rule!("bazel", files: ["WORKSPACE", "WORKSPACE.bazel", "BUILD.bazel", "MODULE.bazel", ".bazelrc"]),
    rule!("buck", files: [".buckconfig", "BUCK"]),
    rule!("autotools", files: ["configure.ac", "Makefile.am"]),
    rule!("qt", files: ["*.pro"], extensions: [".qml", ".ui"]),
    rule!("swiftui", files: ["*.xcworkspace/"]),
    rule!("cocoapods", files: ["Podfile", "Podfile.lock"]),
    rule!("carthage", files: ["Cartfile"]),
    rule!("xcode", files: ["*.xcodeproj/", "*.xcworkspace/"]),

    // Databases and data stores
    rule!("postgresql", packages: ["pg", "postgres", "psycopg2", "psycopg2-binary", "psycopg", "asyncpg"]),
    rule!("mysql", packages: ["mysql", "mysql2", "mysqlclient", "pymysql", "mysql-connector-python"]),
    rule!("sqlite", packages: ["sqlite3", "better-sqlite3", "sqlite"], extensions: [".sqlite", ".sqlite3", ".db"]),
    rule!("mongodb", packages: ["mongodb", "mongoose", "pymongo", "motor"]),
    rule!("redis", packages: ["redis", "ioredis", "redis-py", "aioredis"]),
    rule!("elasticsearch", packages: ["@elastic/elasticsearch", "elasticsearch"]),
    rule!("cassandra", packages: ["cassandra-driver"]),
    rule!("neo4j", packages: ["neo4j", "neo4j-driver"]),
    rule!("dynamodb", packages: ["@aws-sdk/client-dynamodb", "dynamoose"]),
    rule!("supabase", files: ["supabase/config.toml"], packages: ["@supabase/supabase-js", "supabase"]),
    rule!("firebase", files: ["firebase.json", ".firebaserc"], packages: ["firebase", "firebase-admin"]),
    rule!("prisma", files: ["prisma/schema.prisma", "schema.prisma"], packages: ["prisma", "@prisma/client"], extensions: [".prisma"]),
    rule!("typeorm", packages: ["typeorm"]),
    rule!("sequelize", files: [".sequelizerc"], packages: ["sequelize"]),
    rule!("drizzle", files: ["drizzle.config.ts"], packages: ["drizzle-orm"]),
    rule!("knex", files: ["knexfile.js"], packages: ["knex"]),
    rule!("alembic", files: ["alembic.ini", "alembic/"], packages: ["alembic"]),
    rule!("flyway", files: ["flyway.conf"]),
    rule!("liquibase", files: ["liquibase.properties"]),
    rule!("kafka", packages: ["kafkajs", "kafka-python", "confluent-kafka"]),
    rule!("rabbitmq", packages: ["amqplib", "pika"]),
    rule!("graphql-codegen", files: ["codegen.yml", "codegen.ts"], packages: ["@graphql-codegen/cli"]),

    // Testing
    rule!("jest", files: ["jest.config.js", "jest.config.ts", "jest.config.mjs"], packages: ["jest"]),
    rule!("vitest", files: ["vitest.config.ts", "vitest.config.js"], packages: ["vitest"]),
    rule!("mocha", files: [".mocharc.json", ".mocharc.yml", ".mocharc.js"], packages: ["mocha"]),
    rule!("jasmine", packages: ["jasmine", "jasmine-core"]),
    rule!("karma", files: ["karma.conf.js"], packages: ["karma"]),
    rule!("cypress", files: ["cypress.config.js", "cypress.config.ts", "cypress.json", "cypress/"], packages: ["cypress"]),
    rule!("playwright", files: ["playwright.config.ts", "playwright.config.js"], packages: ["@playwright/test", "playwright"]),
    rule!("puppeteer", packages: ["puppeteer"]),
    rule!("testing-library", packages: ["@testing-library/*"]),
    rule!("unittest", packages: ["unittest2"]),
    rule!("tox", files: ["tox.ini"], packages: ["tox"]),
    rule!("nox", files: ["noxfile.py"], packages: ["nox"]),
    rule!("hypothesis", packages: ["hypothesis"]),

    // Infrastructure, containers, CI/CD
    rule!("docker", files: ["Dockerfile", "Dockerfile.*", ".dockerignore", "docker-compose.yml", "docker-compose.yaml", "compose.yml", "compose.yaml"]),
    rule!("docker-compose", files: ["docker-compose.yml", "docker-compose.yaml", "compose.yml", "compose.yaml", "docker-compose.*.yml"]),
    rule!("podman", files: ["Containerfile"]),
    rule!("kubernetes", files: ["k8s/", "kubernetes/", "kustomization.yaml", "skaffold.yaml"]),
    rule!("helm", files: ["Chart.yaml", "charts/", "values.yaml"]),
    rule!("terraform", files: ["main.tf", ".terraform.lock.hcl", "terraform/"], extensions: [".tf", ".tfvars"]),
    rule!("pulumi", files: ["Pulumi.yaml"], packages: ["@pulumi/pulumi", "pulumi"]),
    rule!("ansible", files: ["ansible.cfg", "playbook.yml", "roles/"], packages: ["ansible"]),
    rule!("vagrant", files: ["Vagrantfile"]),
    rule!("packer", files: ["*.pkr.hcl"]),
    rule!("nix", files: ["flake.nix", "default.nix", "shell.nix"], extensions: [".nix"]),
    rule!("aws", files: ["samconfig.toml", "template.yaml", "buildspec.yml", "appspec.yml"], packages: ["aws-sdk", "@aws-sdk/*", "boto3", "botocore"]),
    rule!("aws-cdk", files: ["cdk.json"], packages: ["aws-cdk-lib", "aws-cdk"]),
    rule!("aws-lambda", packages: ["@types/aws-lambda", "aws-lambda-powertools"]),
    rule!("serverless", files: ["serverless.yml", "serverless.yaml", "serverless.ts"], packages: ["serverless"]),
    rule!("google-cloud", files: ["app.yaml", "cloudbuild.yaml", ".gcloudignore"], packages: ["@google-cloud/*", "google-cloud-*"]),
    rule!("azure", files: ["azure-pipelines.yml", "host.json", "azure.yaml"], packages: ["@azure/*", "azure-*"]),
    rule!("vercel", files: ["vercel.json", ".vercelignore"], packages: ["vercel", "@vercel/*"]),
    rule!("netlify", files: ["netlify.toml", "_redirects"], packages: ["netlify-cli"]),
    rule!("cloudflare-workers", files: ["wrangler.toml", "wrangler.json", "wrangler.jsonc"], packages: ["wrangler", "@cloudflare/workers-types"]),
    rule!("heroku", files: ["Procfile", "app.json"]),
    rule!("fly-io", files: ["fly.toml"]),
    rule!("render", files: ["render.yaml"]),
    rule!("railway", files: ["railway.json", "railway.toml"]),
    rule!("nginx", files: ["nginx.conf", "nginx/"]),
    rule!("apache-httpd", files: [".htaccess", "httpd.conf"]),
    rule!("github-actions", files: [".github/workflows/"]),
    rule!("gitlab-ci", files: [".gitlab-ci.yml"]),
    rule!("circleci", files: [".circleci/"]),
    rule!("travis-ci", files: [".travis.yml"]),
    rule!("jenkins", files: ["Jenkinsfile"]),
    rule!("azure-pipelines", files: ["azure-pipelines.yml", ".azure-pipelines/"]),
    rule!("bitbucket-pipelines", files: ["bitbucket-pipelines.yml"]),
    rule!("drone", files: [".drone.yml"]),
    rule!("woodpecker", files: [".woodpecker.yml", ".woodpecker/"]),
    rule!("buildkite", files: [".buildkite/"]),
    rule!("dependabot", files: [".github/dependabot.yml"]),
    rule!("renovate", files: ["renovate.json", ".renovaterc", ".renovaterc.json"]),
    rule!("pre-commit", files: [".pre-commit-config.yaml"], packages: ["pre-commit"]),
    rule!("editorconfig", files: [".editorconfig"]),
    rule!("devcontainer", files: [".devcontainer/", ".devcontainer.json"]),
    rule!("gitpod", files: [".gitpod.yml"]),
    rule!("prometheus", files: ["prometheus.yml"], packages: ["prom-client", "prometheus-client", "prometheus_client"]),
    rule!("grafana", files: ["grafana/"]),
    rule!("sentry", packages: ["@sentry/node", "@sentry/react", "@sentry/browser", "sentry-sdk"]),
    rule!("opentelemetry", packages: ["@opentelemetry/api", "opentelemetry-api", "opentelemetry-sdk"]),
    rule!("stripe", packages: ["stripe", "@stripe/stripe-js"]),
    rule!("auth0", packages: ["auth0", "@auth0/auth0-react", "@auth0/nextjs-auth0"]),
    rule!("nextauth", packages: ["next-auth", "@auth/core"]),
    rule!("clerk", packages: ["@clerk/nextjs", "@clerk/clerk-react"]),
    rule!("passport", packages: ["passport"]),
    rule!("jwt", packages: ["jsonwebtoken", "pyjwt", "jose"]),

    // Templates, docs, data formats
    rule!("markdown", extensions: [".md", ".markdown"]),
    rule!("mdx", packages: ["@mdx-js/react", "@next/mdx"], extensions: [".mdx"]),
    rule!("latex", extensions: [".tex", ".bib"]),
    rule!("handlebars", packages: ["handlebars", "express-handlebars"], extensions: [".hbs", ".handlebars"]),
    rule!("pug", packages: ["pug"], extensions: [".pug"]),
    rule!("ejs", packages: ["ejs"], extensions: [".ejs"]),
    rule!("nunjucks", packages: ["nunjucks"], extensions: [".njk"]),
    rule!("jinja", packages: ["jinja2"], extensions: [".jinja", ".j2", ".jinja2"]),
    rule!("liquid", extensions: [".liquid"]),
    rule!("twig", packages: ["twig"], extensions: [".twig"]),
    rule!("haml", extensions: [".haml"]),
    rule!("protobuf", files: ["buf.yaml", "buf.gen.yaml"], packages: ["protobufjs", "protobuf", "grpcio-tools"], extensions: [".proto"]),
    rule!("grpc", packages: ["@grpc/grpc-js", "grpcio"]),
    rule!("openapi", files: ["openapi.yaml", "openapi.yml", "openapi.json", "swagger.yaml", "swagger.json"]),
    rule!("yaml", extensions: [".yml", ".yaml"]),
    rule!("toml", extensions: [".toml"]),
    rule!("wasm-bindgen", packages: ["wasm-bindgen"]),
    rule!("chrome-extension", files: ["manifest.json"], packages: ["@types/chrome", "webextension-polyfill"]),
    rule!("vscode-extension", files: [".vscodeignore", "vsc-extension-quickstart.md"], packages: ["@types/vscode", "vscode"]),
];
